//! Transaction processors - Payment channels a transaction can go through

use crate::transaction::Transaction;

/// A payment channel
///
/// `process` returns the line describing what the channel did.
pub trait TransactionProcessor {
    fn name(&self) -> &'static str;

    fn process(&self, transaction: &Transaction) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn name(&self) -> &'static str {
        "Bank transfer"
    }

    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "Bank transfer of {} for '{}'",
            transaction.amount, transaction.category
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn name(&self) -> &'static str {
        "Mobile money"
    }

    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "Mobile money transfer of {} for '{}'",
            transaction.amount, transaction.category
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn name(&self) -> &'static str {
        "Crypto wallet"
    }

    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "Crypto wallet transfer of {} for '{}'",
            transaction.amount, transaction.category
        )
    }
}

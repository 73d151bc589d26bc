//! FinanceApp - Processes transactions and keeps their history

use tracing::info;

use crate::account::{Account, SavingsAccount};
use crate::error::FinanceError;
use crate::money::Money;
use crate::processor::{
    BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor, TransactionProcessor,
};
use crate::transaction::Transaction;

/// What happened to one recorded transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutcome {
    /// Line produced by the payment channel
    pub processed: String,
    /// New balance, or why the account refused the charge
    pub applied: Result<Money, FinanceError>,
}

#[derive(Debug, Default)]
pub struct FinanceApp {
    transactions: Vec<Transaction>,
}

impl FinanceApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a transaction through a channel, charge the account and keep it
    /// in the history.
    ///
    /// The history records the transaction even when the account refuses
    /// it. Only a repeated id is rejected outright.
    pub fn record(
        &mut self,
        processor: &dyn TransactionProcessor,
        account: &mut dyn Account,
        transaction: Transaction,
    ) -> Result<TransactionOutcome, FinanceError> {
        if self.transactions.iter().any(|t| t.id == transaction.id) {
            return Err(FinanceError::DuplicateTransaction { id: transaction.id });
        }

        let processed = processor.process(&transaction);
        info!(id = transaction.id, channel = processor.name(), "transaction processed");
        let applied = account.apply_transaction(&transaction);

        self.transactions.push(transaction);
        Ok(TransactionOutcome { processed, applied })
    }

    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sum of every recorded amount
    pub fn total_spent(&self) -> Money {
        self.transactions
            .iter()
            .fold(Money::ZERO, |total, t| total + t.amount)
    }

    /// Seed `SA-001` with $1000 and run three sample transactions
    pub fn run_demo(&mut self) -> Result<(SavingsAccount, Vec<TransactionOutcome>), FinanceError> {
        let mut account = SavingsAccount::new("SA-001", Money::from_units(1000));

        let samples: [(&dyn TransactionProcessor, Transaction); 3] = [
            (
                &MobileMoneyProcessor,
                Transaction::new(1, Money::from_cents(12050), "Groceries"),
            ),
            (
                &BankTransferProcessor,
                Transaction::new(2, Money::from_units(200), "Utilities"),
            ),
            (
                &CryptoWalletProcessor,
                Transaction::new(3, Money::from_units(150), "Entertainment"),
            ),
        ];

        let mut outcomes = Vec::with_capacity(samples.len());
        for (processor, transaction) in samples {
            outcomes.push(self.record(processor, &mut account, transaction)?);
        }

        Ok((account, outcomes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_demo() {
        let mut app = FinanceApp::new();
        let (account, outcomes) = app.run_demo().unwrap();

        assert_eq!(account.number(), "SA-001");
        assert_eq!(account.balance(), Money::from_cents(52950));
        assert_eq!(app.history().len(), 3);
        assert_eq!(app.total_spent(), Money::from_cents(47050));

        assert_eq!(
            outcomes[0].processed,
            "Mobile money transfer of $120.50 for 'Groceries'"
        );
        assert_eq!(outcomes[2].applied, Ok(Money::from_cents(52950)));
    }

    #[test]
    fn test_refused_transaction_stays_in_history() {
        let mut app = FinanceApp::new();
        let mut account = SavingsAccount::new("SA-009", Money::from_units(10));

        let outcome = app
            .record(
                &BankTransferProcessor,
                &mut account,
                Transaction::new(1, Money::from_units(50), "Travel"),
            )
            .unwrap();

        assert!(matches!(
            outcome.applied,
            Err(FinanceError::InsufficientFunds { .. })
        ));
        assert_eq!(app.history().len(), 1);
        assert_eq!(account.balance(), Money::from_units(10));
    }

    #[test]
    fn test_duplicate_transaction_id() {
        let mut app = FinanceApp::new();
        let mut account = SavingsAccount::new("SA-010", Money::from_units(100));

        app.record(
            &MobileMoneyProcessor,
            &mut account,
            Transaction::new(7, Money::from_units(1), "Snacks"),
        )
        .unwrap();

        let err = app
            .record(
                &MobileMoneyProcessor,
                &mut account,
                Transaction::new(7, Money::from_units(1), "Snacks"),
            )
            .unwrap_err();
        assert_eq!(err, FinanceError::DuplicateTransaction { id: 7 });
        assert_eq!(account.balance(), Money::from_units(99));
    }
}

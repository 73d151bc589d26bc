//! Accounts - Balances that transactions are applied to

use tracing::{info, warn};

use crate::error::FinanceError;
use crate::money::Money;
use crate::transaction::Transaction;

/// Something a transaction can be charged to
pub trait Account {
    fn number(&self) -> &str;

    fn balance(&self) -> Money;

    /// Deduct the transaction amount and return the new balance
    fn apply_transaction(&mut self, transaction: &Transaction) -> Result<Money, FinanceError>;
}

/// Plain account: always deducts, the balance may go negative
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    number: String,
    balance: Money,
}

impl CheckingAccount {
    pub fn new(number: impl Into<String>, initial_balance: Money) -> Self {
        Self {
            number: number.into(),
            balance: initial_balance,
        }
    }
}

impl Account for CheckingAccount {
    fn number(&self) -> &str {
        &self.number
    }

    fn balance(&self) -> Money {
        self.balance
    }

    fn apply_transaction(&mut self, transaction: &Transaction) -> Result<Money, FinanceError> {
        self.balance = self.balance - transaction.amount;
        info!(account = %self.number, balance = %self.balance, "transaction applied");
        Ok(self.balance)
    }
}

/// Savings account: refuses to go below zero
#[derive(Debug, Clone)]
pub struct SavingsAccount {
    number: String,
    balance: Money,
}

impl SavingsAccount {
    pub fn new(number: impl Into<String>, initial_balance: Money) -> Self {
        Self {
            number: number.into(),
            balance: initial_balance,
        }
    }
}

impl Account for SavingsAccount {
    fn number(&self) -> &str {
        &self.number
    }

    fn balance(&self) -> Money {
        self.balance
    }

    fn apply_transaction(&mut self, transaction: &Transaction) -> Result<Money, FinanceError> {
        if transaction.amount > self.balance {
            warn!(account = %self.number, id = transaction.id, "insufficient funds");
            return Err(FinanceError::InsufficientFunds {
                balance: self.balance,
                requested: transaction.amount,
            });
        }

        self.balance = self.balance - transaction.amount;
        info!(account = %self.number, balance = %self.balance, "transaction applied");
        Ok(self.balance)
    }
}

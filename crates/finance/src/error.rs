//! Error types for the finance exercise

use thiserror::Error;

use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("Transaction {id} already recorded")]
    DuplicateTransaction { id: u32 },
}

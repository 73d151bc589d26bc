//! # Classroom Finance
//!
//! Transaction processing through interchangeable payment channels,
//! applied to accounts with different overdraft rules.

pub mod account;
pub mod app;
pub mod error;
pub mod money;
pub mod processor;
pub mod transaction;

pub use account::{Account, CheckingAccount, SavingsAccount};
pub use app::{FinanceApp, TransactionOutcome};
pub use error::FinanceError;
pub use money::Money;
pub use processor::{
    BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor, TransactionProcessor,
};
pub use transaction::Transaction;

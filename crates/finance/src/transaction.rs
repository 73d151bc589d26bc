//! Transaction - A single spend against an account

use chrono::{DateTime, Utc};

use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: u32,
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub category: String,
}

impl Transaction {
    /// Create a transaction dated now
    pub fn new(id: u32, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id,
            date: Utc::now(),
            amount,
            category: category.into(),
        }
    }

    /// Builder: set the date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

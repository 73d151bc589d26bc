//! Inventory models - The items a repository can hold
//!
//! Each item has an immutable id and a mutable quantity. The quantity
//! setter comes from `Stocked` and is meant for repositories only.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Entity, Stocked};

/// A general stock record with the date it was logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: u32,
    name: String,
    quantity: u32,
    date_added: DateTime<Utc>,
}

impl InventoryItem {
    /// Create an item added now
    pub fn new(id: u32, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added: Utc::now(),
        }
    }

    /// Builder: set the date added
    pub fn with_date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = date_added;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}

/// An electronic product with brand and warranty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicItem {
    id: u32,
    name: String,
    quantity: u32,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: u32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

/// A perishable grocery product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    id: u32,
    name: String,
    quantity: u32,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: u32, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Check whether the item is past its expiry date on `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Stocked for InventoryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for ElectronicItem {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for GroceryItem {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

//! # Classroom Inventory
//!
//! Keyed inventory repositories and their file persistence.
//!
//! ## Components
//!
//! - `InMemoryRepository` - In-memory implementation of `shared::Repository`
//! - `JsonStore` - Save/load item lists as JSON files
//! - `InventoryLog` - Append-only item log bound to a file
//! - `WarehouseManager` - Electronics and grocery stock

pub mod log;
pub mod model;
pub mod repository;
pub mod store;
pub mod warehouse;

pub use log::{InventoryApp, InventoryLog};
pub use model::{ElectronicItem, GroceryItem, InventoryItem};
pub use repository::InMemoryRepository;
pub use store::{JsonStore, StoreError};
pub use warehouse::{increase_stock, remove_item, WarehouseManager};

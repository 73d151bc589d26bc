//! WarehouseManager - Typed electronics and grocery stock
//!
//! Stock operations are generic over any `Repository` of `Stocked`
//! items, so the same code drives both inventories.

use chrono::{Duration, NaiveDate};
use shared::{Repository, RepositoryError, RepositoryResult, Stocked};
use tracing::info;

use crate::model::{ElectronicItem, GroceryItem};
use crate::repository::InMemoryRepository;

/// Owner of the warehouse's two inventories
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: InMemoryRepository<ElectronicItem>,
    groceries: InMemoryRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed sample stock; grocery expiry dates count from `today`
    pub fn seed_data(&mut self, today: NaiveDate) -> RepositoryResult<()> {
        self.electronics
            .add(ElectronicItem::new(1, "Laptop", 10, "Macbook", 24))?;
        self.electronics
            .add(ElectronicItem::new(2, "Smartphone", 20, "Tecno", 12))?;
        self.electronics
            .add(ElectronicItem::new(3, "Tablet", 15, "Apple", 18))?;

        self.groceries
            .add(GroceryItem::new(1, "Oats", 50, today + Duration::days(7)))?;
        self.groceries
            .add(GroceryItem::new(2, "Bacon", 30, today + Duration::days(3)))?;
        self.groceries
            .add(GroceryItem::new(3, "Jam", 100, today + Duration::days(14)))?;

        Ok(())
    }

    pub fn electronics(&self) -> &InMemoryRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut InMemoryRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &InMemoryRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut InMemoryRepository<GroceryItem> {
        &mut self.groceries
    }
}

/// Add `by` units to an item's stock and return the new quantity.
///
/// The returned value is read back after the update.
pub fn increase_stock<T, R>(repo: &mut R, id: u32, by: u32) -> RepositoryResult<u32>
where
    T: Stocked + Clone,
    R: Repository<T>,
{
    let current = repo.get(id)?.quantity();
    let target = current.checked_add(by).ok_or(RepositoryError::InvalidQuantity {
        quantity: i64::from(current) + i64::from(by),
    })?;

    repo.update_quantity(id, i64::from(target))?;
    let updated = repo.get(id)?.quantity();

    info!(id, quantity = updated, "stock increased");
    Ok(updated)
}

/// Remove an item from stock
pub fn remove_item<T, R>(repo: &mut R, id: u32) -> RepositoryResult<T>
where
    T: Stocked + Clone,
    R: Repository<T>,
{
    let item = repo.remove(id)?;
    info!(id, "item removed from stock");
    Ok(item)
}

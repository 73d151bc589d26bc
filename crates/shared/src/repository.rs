//! Repository contract - Keyed collections of entities
//!
//! This module defines WHAT a keyed repository offers.
//! How items are actually held (memory, file, ...) is the adapter's job.
//!
//! ```text
//! Contract (this crate)       │  Adapter (inventory crate)
//! ────────────────────────────┼────────────────────────────
//! trait Entity / Stocked      │  ElectronicItem, GroceryItem
//! trait Repository<T>         │  InMemoryRepository<T>
//! ```

use crate::error::RepositoryResult;

/// Anything with a unique integer identity
///
/// This is the only capability a repository needs from its items.
pub trait Entity {
    fn id(&self) -> u32;
}

/// Entities that carry a non-negative stock quantity
pub trait Stocked: Entity {
    fn quantity(&self) -> u32;

    /// Overwrite the quantity.
    ///
    /// Only repositories call this; callers go through
    /// [`Repository::update_quantity`].
    fn set_quantity(&mut self, quantity: u32);
}

/// Keyed Repository Trait
///
/// Items are owned by the repository. Reads hand out shared
/// references or cloned snapshots, never mutable aliases.
pub trait Repository<T: Entity + Clone> {
    /// Insert an item; fails with `DuplicateKey` if its id is taken
    fn add(&mut self, item: T) -> RepositoryResult<()>;

    /// Look an item up by id; fails with `NotFound`
    fn get(&self, id: u32) -> RepositoryResult<&T>;

    /// Remove and return an item; fails with `NotFound`
    fn remove(&mut self, id: u32) -> RepositoryResult<T>;

    /// Snapshot of every stored item
    fn list_all(&self) -> Vec<T>;

    /// Number of stored items
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if an id is stored
    fn contains(&self, id: u32) -> bool {
        self.get(id).is_ok()
    }

    /// Set the quantity of a stored item.
    ///
    /// Negative values fail with `InvalidQuantity` before the id is looked
    /// up; an absent id then fails with `NotFound`.
    fn update_quantity(&mut self, id: u32, new_quantity: i64) -> RepositoryResult<()>
    where
        T: Stocked;
}

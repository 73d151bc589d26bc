//! In-Memory Repository Implementation
//!
//! Items live in a map keyed by their id and are owned exclusively by
//! the repository. Listing is ordered by id.

use std::collections::BTreeMap;

use shared::{Entity, Repository, RepositoryError, RepositoryResult, Stocked};
use tracing::debug;

/// In-memory keyed repository
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: BTreeMap<u32, T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Iterate stored items without cloning them
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

impl<T: Entity + Clone> InMemoryRepository<T> {
    /// Build a repository from a list of items, e.g. one loaded from disk.
    ///
    /// Fails with `DuplicateKey` on the first repeated id.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> RepositoryResult<Self> {
        let mut repo = Self::new();
        for item in items {
            repo.add(item)?;
        }
        Ok(repo)
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity + Clone> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(RepositoryError::DuplicateKey { id });
        }
        self.items.insert(id, item);
        debug!(id, "item added");
        Ok(())
    }

    fn get(&self, id: u32) -> RepositoryResult<&T> {
        self.items.get(&id).ok_or(RepositoryError::NotFound { id })
    }

    fn remove(&mut self, id: u32) -> RepositoryResult<T> {
        let item = self
            .items
            .remove(&id)
            .ok_or(RepositoryError::NotFound { id })?;
        debug!(id, "item removed");
        Ok(item)
    }

    fn list_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, id: u32) -> bool {
        self.items.contains_key(&id)
    }

    fn update_quantity(&mut self, id: u32, new_quantity: i64) -> RepositoryResult<()>
    where
        T: Stocked,
    {
        let quantity = u32::try_from(new_quantity).map_err(|_| RepositoryError::InvalidQuantity {
            quantity: new_quantity,
        })?;
        let item = self
            .items
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound { id })?;
        item.set_quantity(quantity);
        debug!(id, quantity, "quantity updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InventoryItem;

    fn item(id: u32, name: &str, quantity: u32) -> InventoryItem {
        InventoryItem::new(id, name, quantity)
    }

    fn summary(items: &[InventoryItem]) -> Vec<(u32, String, u32)> {
        items
            .iter()
            .map(|i| (i.id(), i.name().to_string(), i.quantity()))
            .collect()
    }

    #[test]
    fn test_add_and_get() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(1, "Laptop", 5)).unwrap();

        let found = repo.get(1).unwrap();
        assert_eq!(found.name(), "Laptop");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_duplicate_add_leaves_contents_unchanged() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(1, "Laptop", 5)).unwrap();

        let err = repo.add(item(1, "Impostor", 99)).unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateKey { id: 1 });

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(1).unwrap().name(), "Laptop");
        assert_eq!(repo.get(1).unwrap().quantity(), 5);
    }

    #[test]
    fn test_get_and_remove_absent_id() {
        let mut repo: InMemoryRepository<InventoryItem> = InMemoryRepository::new();

        assert_eq!(repo.get(42).unwrap_err(), RepositoryError::NotFound { id: 42 });
        assert_eq!(repo.remove(42).unwrap_err(), RepositoryError::NotFound { id: 42 });
    }

    #[test]
    fn test_remove_then_list() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(1, "Laptop", 5)).unwrap();
        repo.add(item(2, "Monitor", 7)).unwrap();

        let removed = repo.remove(1).unwrap();
        assert_eq!(removed.name(), "Laptop");

        assert_eq!(
            summary(&repo.list_all()),
            vec![(2, "Monitor".to_string(), 7)]
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(1, "Laptop", 5)).unwrap();

        let mut snapshot = repo.list_all();
        snapshot[0].set_quantity(500);
        snapshot.clear();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(1).unwrap().quantity(), 5);
    }

    #[test]
    fn test_update_quantity() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(1, "Laptop", 5)).unwrap();

        repo.update_quantity(1, 12).unwrap();
        assert_eq!(repo.get(1).unwrap().quantity(), 12);

        repo.update_quantity(1, 0).unwrap();
        assert_eq!(repo.get(1).unwrap().quantity(), 0);
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(1, "Laptop", 5)).unwrap();

        let err = repo.update_quantity(1, -1).unwrap_err();
        assert_eq!(err, RepositoryError::InvalidQuantity { quantity: -1 });
        assert_eq!(repo.get(1).unwrap().quantity(), 5);
    }

    #[test]
    fn test_invalid_quantity_checked_before_existence() {
        let mut repo: InMemoryRepository<InventoryItem> = InMemoryRepository::new();

        let err = repo.update_quantity(7, -3).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidQuantity { .. }));

        let err = repo.update_quantity(7, 3).unwrap_err();
        assert_eq!(err, RepositoryError::NotFound { id: 7 });
    }

    #[test]
    fn test_oversized_quantity_is_rejected() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(1, "Laptop", 5)).unwrap();

        let err = repo.update_quantity(1, i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidQuantity { .. }));
        assert_eq!(repo.get(1).unwrap().quantity(), 5);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let repo = InMemoryRepository::from_items(vec![item(2, "Monitor", 7), item(1, "Laptop", 5)])
            .unwrap();
        assert_eq!(
            repo.list_all().iter().map(|i| i.id()).collect::<Vec<_>>(),
            vec![1, 2]
        );

        let err = InMemoryRepository::from_items(vec![item(1, "A", 1), item(1, "B", 2)]).unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateKey { id: 1 });
    }
}

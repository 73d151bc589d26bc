//! InventoryLog - Append-only item log bound to a file

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::Entity;

use crate::model::InventoryItem;
use crate::store::{JsonStore, StoreError};

/// Append-only log of items persisted to a single JSON file
#[derive(Debug)]
pub struct InventoryLog<T> {
    entries: Vec<T>,
    file_path: PathBuf,
}

impl<T> InventoryLog<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            file_path: file_path.into(),
        }
    }

    pub fn add(&mut self, item: T) {
        self.entries.push(item);
    }

    /// Snapshot of the log in insertion order
    pub fn all(&self) -> Vec<T> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Write the log to its file
    pub fn save(&self) -> Result<(), StoreError> {
        JsonStore::save(&self.entries, &self.file_path)
    }

    /// Replace the log with the file's contents.
    ///
    /// A missing file leaves the log empty. On a parse error the
    /// current entries are kept.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        self.entries = JsonStore::load(&self.file_path)?;
        Ok(self.entries.len())
    }
}

/// Inventory demo: seed, persist and restore a log of stock records
#[derive(Debug)]
pub struct InventoryApp {
    log: InventoryLog<InventoryItem>,
}

impl InventoryApp {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            log: InventoryLog::new(file_path),
        }
    }

    pub fn seed_sample_data(&mut self) {
        for (id, name, quantity) in [
            (1, "Laptop", 5),
            (2, "Game Console", 15),
            (3, "Desktop", 10),
            (4, "Monitor", 7),
            (5, "Projector", 50),
        ] {
            self.log.add(InventoryItem::new(id, name, quantity));
        }
    }

    pub fn save_data(&self) -> Result<(), StoreError> {
        self.log.save()
    }

    pub fn load_data(&mut self) -> Result<usize, StoreError> {
        self.log.load()
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.log.all()
    }

    pub fn file_path(&self) -> &Path {
        self.log.file_path()
    }
}

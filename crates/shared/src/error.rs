//! Error types shared by the classroom exercises

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by keyed repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// An item with the same id is already stored
    #[error("Item with ID {id} already exists.")]
    DuplicateKey { id: u32 },

    /// No item is stored under the id
    #[error("Item with ID {id} not found.")]
    NotFound { id: u32 },

    /// Requested quantity is negative or does not fit the quantity field
    #[error("Quantity cannot be negative or out of range (got {quantity}).")]
    InvalidQuantity { quantity: i64 },
}

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

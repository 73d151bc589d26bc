//! JsonStore - File persistence for item lists
//!
//! Items are written as a pretty-printed JSON array, one object per item
//! with labelled fields. A missing file loads as an empty list.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Entity, Repository, RepositoryError};
use thiserror::Error;
use tracing::{info, warn};

use crate::repository::InMemoryRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode items for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed item file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored items conflict: {0}")]
    Conflict(#[from] RepositoryError),
}

/// JSON file store for items of type `T`
#[derive(Debug)]
pub struct JsonStore<T> {
    _items: PhantomData<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Write `items` to `path`, replacing any existing file
    pub fn save(items: &[T], path: &Path) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, items).map_err(|source| {
            StoreError::Serialize {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        info!(path = %path.display(), count = items.len(), "items saved");
        Ok(())
    }

    /// Read items back from `path`.
    ///
    /// An absent file is not an error and yields no items.
    pub fn load(path: &Path) -> Result<Vec<T>, StoreError> {
        if !path.exists() {
            info!(path = %path.display(), "no saved file found");
            return Ok(Vec::new());
        }

        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<T> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), count = items.len(), "items loaded");
        Ok(items)
    }

    /// Like [`JsonStore::load`], but reports failures and yields no items
    pub fn load_or_empty(path: &Path) -> Vec<T> {
        Self::load(path).unwrap_or_else(|err| {
            warn!(error = %err, "failed to load items, starting empty");
            Vec::new()
        })
    }
}

impl<T> JsonStore<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    /// Save every item of a repository
    pub fn save_repository<R: Repository<T>>(repo: &R, path: &Path) -> Result<(), StoreError> {
        Self::save(&repo.list_all(), path)
    }

    /// Load a file into a fresh repository.
    ///
    /// Repeated ids in the file fail with `Conflict`.
    pub fn restore_repository(path: &Path) -> Result<InMemoryRepository<T>, StoreError> {
        let items = Self::load(path)?;
        Ok(InMemoryRepository::from_items(items)?)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duesbook::{MemberStore, StoreError};
use duesbook_domain::Member;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while reading or writing the member file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be read or written.
    #[error("Could not access {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file content is not a valid member list.
    #[error("Could not parse {path}: {source}")]
    Json {
        /// The file involved.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
    /// The file holds an inconsistent member list.
    #[error("Invalid member data in {path}: {source}")]
    Store {
        /// The file involved.
        path: PathBuf,
        /// The consistency error.
        source: StoreError,
    },
}

/// Loads and saves the full member list.
pub trait MemberStorage {
    /// Reads the stored members into a new store.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the members cannot be read or are invalid.
    fn load(&self) -> Result<MemberStore, StorageError>;

    /// Writes every member of `store`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the members cannot be written.
    fn save(&self, store: &MemberStore) -> Result<(), StorageError>;
}

/// Stores members as a pretty-printed JSON array in a single file.
///
/// A missing file loads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl MemberStorage for JsonFileStorage {
    fn load(&self) -> Result<MemberStore, StorageError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No member file yet, starting empty");
            return Ok(MemberStore::new());
        }

        let content: String =
            std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let members: Vec<Member> =
            serde_json::from_str(&content).map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })?;
        let count: usize = members.len();
        let store: MemberStore =
            MemberStore::from_members(members).map_err(|source| StorageError::Store {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), count, "Loaded members");
        Ok(store)
    }

    fn save(&self, store: &MemberStore) -> Result<(), StorageError> {
        let content: String =
            serde_json::to_string_pretty(store.all_members()).map_err(|source| {
                StorageError::Json {
                    path: self.path.clone(),
                    source,
                }
            })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        debug!(
            path = %self.path.display(),
            count = store.all_members().len(),
            "Saved members"
        );
        Ok(())
    }
}

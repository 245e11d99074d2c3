// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the pet grooming salon.
//!
//! Every entity collection is stored as one row of the `collections` table,
//! keyed by the collection name and holding the whole collection as JSON.
//! The table is created by embedded Diesel migrations.
//!
//! ## Databases
//!
//! - File databases run in WAL mode.
//! - In-memory databases use a uniquely named shared-cache URI per call so
//!   tests never see each other's data.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use diesel::SqliteConnection;
use petgroom::{CollectionKey, CollectionWrite, Storage, StorageError};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use queries::CollectionRow;

/// `SQLite`-backed collection storage.
pub struct Persistence {
    conn: SqliteConnection,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_salon_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        backend::sqlite::enable_wal_mode(&mut conn)?;

        info!(path = path_str, "Opened salon database");
        Ok(Self { conn })
    }

    /// Reads the payload stored under a collection name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn load_collection(&mut self, name: &str) -> Result<Option<String>, PersistenceError> {
        queries::load_collection(&mut self.conn, name)
    }

    /// Writes several collection payloads in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; nothing is written in that case.
    pub fn replace_collections(&mut self, slots: &[(&str, &str)]) -> Result<(), PersistenceError> {
        mutations::replace_collections(&mut self.conn, slots)
    }

    /// Lists every stored collection row.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_collections(&mut self) -> Result<Vec<CollectionRow>, PersistenceError> {
        queries::list_collections(&mut self.conn)
    }
}

impl Storage for Persistence {
    fn load(&mut self, key: CollectionKey) -> Result<Option<String>, StorageError> {
        self.load_collection(key.as_str())
            .map_err(StorageError::from)
    }

    fn replace(&mut self, writes: &[CollectionWrite]) -> Result<(), StorageError> {
        let slots: Vec<(&str, &str)> = writes
            .iter()
            .map(|write| (write.key.as_str(), write.payload.as_str()))
            .collect();
        self.replace_collections(&slots)
            .map_err(StorageError::from)
    }
}

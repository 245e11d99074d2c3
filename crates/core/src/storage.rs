// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The durable key-value seam.
//!
//! Each entity collection lives in one named slot holding the whole
//! collection as a JSON array. Slots are read once at startup and rewritten
//! in full after every committed mutation.

use crate::error::StorageError;
use std::collections::HashMap;

/// Named slot for one entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKey {
    /// Clients.
    Clients,
    /// Pets.
    Pets,
    /// Groomers.
    Groomers,
    /// Packages.
    Packages,
    /// Appointments.
    Appointments,
    /// Commission ledger.
    Commissions,
    /// Points ledger.
    Points,
}

impl CollectionKey {
    /// Returns the slot name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clients => "petshop-clients",
            Self::Pets => "petshop-pets",
            Self::Groomers => "petshop-groomers",
            Self::Packages => "petshop-packages",
            Self::Appointments => "petshop-appointments",
            Self::Commissions => "petshop-commissions",
            Self::Points => "petshop-groomer-points",
        }
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full replacement of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionWrite {
    /// The slot to replace.
    pub key: CollectionKey,
    /// The serialized collection.
    pub payload: String,
}

/// Durable storage of entity collections.
pub trait Storage {
    /// Reads a slot. Returns `None` if the slot was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&mut self, key: CollectionKey) -> Result<Option<String>, StorageError>;

    /// Replaces every slot in `writes` as one atomic batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch could not be written. No slot is
    /// changed in that case.
    fn replace(&mut self, writes: &[CollectionWrite]) -> Result<(), StorageError>;
}

/// Volatile storage for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<CollectionKey, String>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw payload of a slot.
    #[must_use]
    pub fn payload(&self, key: CollectionKey) -> Option<&str> {
        self.slots.get(&key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&mut self, key: CollectionKey) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(&key).cloned())
    }

    fn replace(&mut self, writes: &[CollectionWrite]) -> Result<(), StorageError> {
        for write in writes {
            self.slots.insert(write.key, write.payload.clone());
        }
        Ok(())
    }
}

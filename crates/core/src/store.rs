// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use petgroom_domain::Entity;
use serde::{Deserialize, Serialize};

/// An insertion-ordered collection of records keyed by identity.
///
/// Serializes as a plain array so a stored slot is the record list itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the record with the given id.
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns the record with the given id or a `NotFound` error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this id.
    pub fn require(&self, id: &T::Id) -> Result<&T, CoreError> {
        self.get(id).ok_or_else(|| not_found::<T>(id))
    }

    /// Returns true if a record with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Returns the first record matching `predicate` for in-place edits.
    pub(crate) fn find_mut(&mut self, predicate: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.records.iter_mut().find(|record| predicate(record))
    }

    /// Appends a record.
    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    /// Replaces the stored record sharing `record`'s id, keeping its position.
    ///
    /// Returns the previous version.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this id.
    pub fn replace(&mut self, record: T) -> Result<T, CoreError> {
        let slot: &mut T = self
            .records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or_else(|| not_found::<T>(record.id()))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Removes and returns the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this id.
    pub fn remove(&mut self, id: &T::Id) -> Result<T, CoreError> {
        let index: usize = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        Ok(self.records.remove(index))
    }

    /// Removes every record matching `predicate`. Returns how many were removed.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
        let before: usize = self.records.len();
        self.records.retain(|record| !predicate(record));
        before - self.records.len()
    }

    /// Returns the records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// Iterates the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn not_found<T: Entity>(id: &T::Id) -> CoreError {
    CoreError::NotFound {
        entity: T::KIND,
        id: id.to_string(),
    }
}

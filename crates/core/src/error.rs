// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::storage::CollectionKey;
use petgroom_domain::{DomainError, EntityKind};

/// Errors raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend could not be reached or refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// A stored collection could not be decoded.
    #[error("Stored collection '{key}' is corrupt: {message}")]
    Corrupt {
        /// The collection slot.
        key: CollectionKey,
        /// Decoder message.
        message: String,
    },
    /// A collection could not be encoded for writing.
    #[error("Collection '{key}' could not be encoded: {message}")]
    Encode {
        /// The collection slot.
        key: CollectionKey,
        /// Encoder message.
        message: String,
    },
    /// A write batch failed and was rolled back.
    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Errors that can occur while applying a salon operation.
///
/// Every error leaves the in-memory state and storage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A delete was blocked because other records still reference the target.
    #[error("Cannot delete {entity} '{id}': referenced by {count} {referenced_by} record(s)")]
    ReferentialConflict {
        /// The kind of record being deleted.
        entity: EntityKind,
        /// The record's identifier.
        id: String,
        /// The kind of record holding the reference.
        referenced_by: EntityKind,
        /// How many records hold it.
        count: usize,
    },
    /// Auto-assignment found no groomer with status `available`.
    #[error("No groomer is available for assignment")]
    NoGroomerAvailable,
    /// The addressed record does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The kind of record.
        entity: EntityKind,
        /// The requested identifier.
        id: String,
    },
    /// A record refers to another record that does not exist.
    #[error("Referenced {entity} '{id}' does not exist")]
    UnknownReference {
        /// The kind of the missing record.
        entity: EntityKind,
        /// The dangling identifier.
        id: String,
    },
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// The kinds of records the salon keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A client (pet tutor).
    Client,
    /// A pet.
    Pet,
    /// A groomer.
    Groomer,
    /// A service package.
    Package,
    /// An appointment.
    Appointment,
    /// A commission ledger row.
    Commission,
    /// A points ledger row.
    Points,
}

impl EntityKind {
    /// Returns a lowercase name suitable for messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Pet => "pet",
            Self::Groomer => "groomer",
            Self::Package => "package",
            Self::Appointment => "appointment",
            Self::Commission => "commission",
            Self::Points => "points record",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record with a stable identity, stored in an insertion-ordered collection.
pub trait Entity {
    /// The identifier type.
    type Id: Clone + Eq + std::fmt::Display;

    /// The kind reported in errors about this record.
    const KIND: EntityKind;

    /// Returns the record's identifier.
    fn id(&self) -> &Self::Id;
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed identifiers for every salon entity.
//!
//! Identifiers are opaque strings. New ones are UUID v4 values; identifiers
//! read back from storage are accepted verbatim.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generates a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

entity_id!(
    /// Identifies a client (pet tutor).
    ClientId
);
entity_id!(
    /// Identifies a pet.
    PetId
);
entity_id!(
    /// Identifies a groomer on the roster.
    GroomerId
);
entity_id!(
    /// Identifies a service package.
    PackageId
);
entity_id!(
    /// Identifies an appointment.
    AppointmentId
);
entity_id!(
    /// Identifies a commission ledger row.
    CommissionId
);
entity_id!(
    /// Identifies a points ledger row.
    PointsRecordId
);

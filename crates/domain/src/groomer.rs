// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::{Entity, EntityKind};
use crate::ids::GroomerId;
use crate::types::{CommissionRate, GroomerStatus};
use serde::{Deserialize, Serialize};

/// A groomer on the salon roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Groomer {
    /// The groomer identifier.
    pub id: GroomerId,
    /// Display name.
    pub name: String,
    /// Availability for auto-assignment.
    pub status: GroomerStatus,
    /// Share of completed-appointment price paid as commission.
    pub commission_rate: CommissionRate,
}

impl Groomer {
    /// Returns true if the groomer can be picked by auto-assignment.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == GroomerStatus::Available
    }
}

impl Entity for Groomer {
    type Id = GroomerId;
    const KIND: EntityKind = EntityKind::Groomer;

    fn id(&self) -> &GroomerId {
        &self.id
    }
}

/// Groomer fields supplied by a caller before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroomer {
    /// Display name.
    pub name: String,
    /// Availability for auto-assignment.
    #[serde(default)]
    pub status: GroomerStatus,
    /// Commission percentage.
    pub commission_rate: CommissionRate,
}

impl NewGroomer {
    /// Attaches an identifier, producing a full groomer record.
    #[must_use]
    pub fn with_id(self, id: GroomerId) -> Groomer {
        Groomer {
            id,
            name: self.name,
            status: self.status,
            commission_rate: self.commission_rate,
        }
    }
}

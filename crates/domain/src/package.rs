// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::{Entity, EntityKind};
use crate::ids::PackageId;
use crate::money::Money;
use crate::types::TransportType;
use serde::{Deserialize, Serialize};

/// A bundle of services sold as a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// The package identifier.
    pub id: PackageId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Number of baths included.
    pub includes_baths: u32,
    /// Whether grooming is included.
    pub includes_grooming: bool,
    /// Whether hydration is included.
    pub includes_hydration: bool,
    /// Price when the client brings the pet.
    pub base_price: Money,
    /// Price when the salon collects the pet.
    pub pickup_price: Money,
}

impl Package {
    /// Returns the price for the given transport arrangement.
    #[must_use]
    pub const fn price_for(&self, transport: TransportType) -> Money {
        match transport {
            TransportType::Client => self.base_price,
            TransportType::Pickup => self.pickup_price,
        }
    }
}

impl Entity for Package {
    type Id = PackageId;
    const KIND: EntityKind = EntityKind::Package;

    fn id(&self) -> &PackageId {
        &self.id
    }
}

/// Package fields supplied by a caller before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackage {
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Number of baths included.
    pub includes_baths: u32,
    /// Whether grooming is included.
    pub includes_grooming: bool,
    /// Whether hydration is included.
    pub includes_hydration: bool,
    /// Price when the client brings the pet.
    pub base_price: Money,
    /// Price when the salon collects the pet.
    pub pickup_price: Money,
}

impl NewPackage {
    /// Attaches an identifier, producing a full package record.
    #[must_use]
    pub fn with_id(self, id: PackageId) -> Package {
        Package {
            id,
            name: self.name,
            description: self.description,
            includes_baths: self.includes_baths,
            includes_grooming: self.includes_grooming,
            includes_hydration: self.includes_hydration,
            base_price: self.base_price,
            pickup_price: self.pickup_price,
        }
    }
}

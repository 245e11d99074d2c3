// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::money::Money;
use crate::package::Package;
use crate::types::{ServiceType, TransportType};
use serde::{Deserialize, Serialize};

/// Fixed prices for services booked without a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    /// Bath only.
    pub bath: Money,
    /// Grooming only.
    pub grooming: Money,
    /// Bath and grooming.
    pub both: Money,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            bath: Money::from_units(30),
            grooming: Money::from_units(40),
            both: Money::from_units(60),
        }
    }
}

impl PriceTable {
    /// Returns the table price for a service. `package` has no table price.
    #[must_use]
    pub const fn service_price(&self, service_type: ServiceType) -> Money {
        match service_type {
            ServiceType::Bath => self.bath,
            ServiceType::Grooming => self.grooming,
            ServiceType::Both => self.both,
            ServiceType::Package => Money::ZERO,
        }
    }
}

/// Resolves the price of an appointment.
///
/// A package wins over the service type: its base price applies when the
/// client brings the pet and its pickup price otherwise. Without a package
/// the price comes from `table`.
///
/// # Arguments
///
/// * `table` - Fixed service prices
/// * `service_type` - The booked service
/// * `package` - The attached package, if any
/// * `transport` - How the pet reaches the salon
#[must_use]
pub const fn resolve_price(
    table: &PriceTable,
    service_type: ServiceType,
    package: Option<&Package>,
    transport: TransportType,
) -> Money {
    match package {
        Some(package) => package.price_for(transport),
        None => table.service_price(service_type),
    }
}

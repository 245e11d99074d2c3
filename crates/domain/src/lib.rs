// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod appointment;
mod client;
mod entity;
mod error;
pub mod formats;
mod groomer;
mod ids;
mod ledger;
mod money;
mod package;
mod pet;
mod pricing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use appointment::{Appointment, NewAppointment};
pub use client::{Client, NewClient};
pub use entity::{Entity, EntityKind};
pub use error::DomainError;
pub use groomer::{Groomer, NewGroomer};
pub use ids::{
    AppointmentId, ClientId, CommissionId, GroomerId, PackageId, PetId, PointsRecordId,
};
pub use ledger::{Commission, PointsRecord};
pub use money::Money;
pub use package::{NewPackage, Package};
pub use pet::{
    NewPet, Pet, RabiesVaccine, TreatmentRecord, VACCINE_VALIDITY_MONTHS, VACCINE_WARNING_MONTHS,
    VaccineStatus,
};
pub use pricing::{PriceTable, resolve_price};
pub use types::{
    AppointmentStatus, CommissionRate, GroomerStatus, Points, ServiceType, TransportType,
    YearMonth,
};
pub use validation::validate_client;

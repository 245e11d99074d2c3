// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The appointment record.
//!
//! `pet_name` is a copy of the pet's name at booking time, not a reference to
//! a `Pet`. Pet-deletion guards match on this name and therefore cannot tell
//! apart two pets that share a name.

use crate::entity::{Entity, EntityKind};
use crate::formats::{clock_time, iso_date};
use crate::ids::{AppointmentId, ClientId, GroomerId, PackageId};
use crate::money::Money;
use crate::types::{AppointmentStatus, Points, ServiceType, TransportType};
use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// A booked service for one pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// The appointment identifier.
    pub id: AppointmentId,
    /// The client who booked.
    pub client_id: ClientId,
    /// Denormalized pet name.
    pub pet_name: String,
    /// Service day.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Service start time.
    #[serde(with = "clock_time")]
    pub time: Time,
    /// Booked service. Forced to `package` when `package_id` is set.
    pub service_type: ServiceType,
    /// Assigned groomer. `None` means unassigned.
    #[serde(default)]
    pub groomer_id: Option<GroomerId>,
    /// Lifecycle state.
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Package covering this appointment, if any.
    #[serde(default)]
    pub package_id: Option<PackageId>,
    /// How the pet reaches the salon.
    #[serde(default)]
    pub transport_type: TransportType,
    /// Resolved price.
    pub price: Money,
    /// Complexity rating.
    #[serde(default)]
    pub points: Option<Points>,
}

impl Appointment {
    /// Returns a copy with `service_type` forced to `package` if a package
    /// is attached.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.package_id.is_some() {
            self.service_type = ServiceType::Package;
        }
        self
    }

    /// Returns true if no groomer is assigned.
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        self.groomer_id.is_none()
    }

    /// Returns true if this appointment counts toward `groomer`'s workload.
    #[must_use]
    pub fn is_open_work_for(&self, groomer: &GroomerId) -> bool {
        self.status.is_open() && self.groomer_id.as_ref() == Some(groomer)
    }
}

impl Entity for Appointment {
    type Id = AppointmentId;
    const KIND: EntityKind = EntityKind::Appointment;

    fn id(&self) -> &AppointmentId {
        &self.id
    }
}

/// Appointment fields supplied by a caller before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    /// The client who booked.
    pub client_id: ClientId,
    /// Pet name.
    pub pet_name: String,
    /// Service day.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Service start time.
    #[serde(with = "clock_time")]
    pub time: Time,
    /// Booked service.
    pub service_type: ServiceType,
    /// Assigned groomer.
    #[serde(default)]
    pub groomer_id: Option<GroomerId>,
    /// Initial status. Defaults to `waiting`.
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    /// Package covering this appointment.
    #[serde(default)]
    pub package_id: Option<PackageId>,
    /// How the pet reaches the salon.
    #[serde(default)]
    pub transport_type: TransportType,
    /// Resolved price.
    pub price: Money,
    /// Complexity rating.
    #[serde(default)]
    pub points: Option<Points>,
}

impl NewAppointment {
    /// Attaches an identifier and applies creation defaults.
    #[must_use]
    pub fn with_id(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            client_id: self.client_id,
            pet_name: self.pet_name,
            date: self.date,
            time: self.time,
            service_type: self.service_type,
            groomer_id: self.groomer_id,
            status: self.status.unwrap_or_default(),
            package_id: self.package_id,
            transport_type: self.transport_type,
            price: self.price,
            points: self.points,
        }
        .normalized()
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pet care records and the derived rabies-vaccine status.

use crate::entity::{Entity, EntityKind};
use crate::formats::iso_date;
use crate::ids::{ClientId, PetId};
use serde::{Deserialize, Serialize};
use time::Date;

/// Months after the last dose at which the vaccine is flagged as expiring.
pub const VACCINE_WARNING_MONTHS: i32 = 10;

/// Months after the last dose at which the vaccine is expired.
pub const VACCINE_VALIDITY_MONTHS: i32 = 12;

/// A dated treatment or dose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    /// Product or vaccine name.
    pub name: String,
    /// When it was administered.
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// Recorded rabies vaccination state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RabiesVaccine {
    /// Whether staff recorded the vaccine as up to date.
    pub is_up_to_date: bool,
    /// Date of the last dose, if any.
    #[serde(with = "iso_date::option", default)]
    pub last_date: Option<Date>,
}

/// Derived rabies-vaccine standing on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VaccineStatus {
    /// Last dose under 10 months old.
    Current,
    /// Last dose 10 or 11 months old.
    ExpiringSoon,
    /// Not recorded as up to date, no dose date, or 12+ months old.
    Expired,
}

impl VaccineStatus {
    /// Returns true for `Current` and `ExpiringSoon`.
    #[must_use]
    pub const fn is_up_to_date(&self) -> bool {
        matches!(self, Self::Current | Self::ExpiringSoon)
    }
}

impl RabiesVaccine {
    /// Computes the vaccine status as of `today`.
    ///
    /// Age is measured in calendar months, ignoring the day of month.
    #[must_use]
    pub fn status_on(&self, today: Date) -> VaccineStatus {
        let Some(last_date) = self.last_date.filter(|_| self.is_up_to_date) else {
            return VaccineStatus::Expired;
        };

        let months: i32 = months_between(last_date, today);
        if months >= VACCINE_VALIDITY_MONTHS {
            VaccineStatus::Expired
        } else if months >= VACCINE_WARNING_MONTHS {
            VaccineStatus::ExpiringSoon
        } else {
            VaccineStatus::Current
        }
    }
}

fn months_between(from: Date, to: Date) -> i32 {
    let years: i32 = to.year() - from.year();
    let months: i32 = i32::from(u8::from(to.month())) - i32::from(u8::from(from.month()));
    years * 12 + months
}

/// A pet and its care attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// The pet identifier.
    pub id: PetId,
    /// The owning client.
    pub client_id: ClientId,
    /// The pet's name. Appointments copy this value rather than the id.
    pub name: String,
    /// Diet notes.
    #[serde(default)]
    pub food_type: String,
    /// Last anti-parasite treatment.
    #[serde(default)]
    pub last_tick_medicine: Option<TreatmentRecord>,
    /// Rabies vaccination.
    #[serde(default)]
    pub rabies_vaccine: RabiesVaccine,
    /// Vaccination history, oldest first.
    #[serde(default)]
    pub vaccine_history: Vec<TreatmentRecord>,
}

impl Pet {
    /// Returns the rabies-vaccine status as of `today`.
    #[must_use]
    pub fn vaccine_status(&self, today: Date) -> VaccineStatus {
        self.rabies_vaccine.status_on(today)
    }
}

impl Entity for Pet {
    type Id = PetId;
    const KIND: EntityKind = EntityKind::Pet;

    fn id(&self) -> &PetId {
        &self.id
    }
}

/// Pet fields supplied by a caller before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    /// The owning client.
    pub client_id: ClientId,
    /// The pet's name.
    pub name: String,
    /// Diet notes.
    #[serde(default)]
    pub food_type: String,
    /// Last anti-parasite treatment.
    #[serde(default)]
    pub last_tick_medicine: Option<TreatmentRecord>,
    /// Rabies vaccination.
    #[serde(default)]
    pub rabies_vaccine: RabiesVaccine,
    /// Vaccination history.
    #[serde(default)]
    pub vaccine_history: Vec<TreatmentRecord>,
}

impl NewPet {
    /// Attaches an identifier, producing a full pet record.
    #[must_use]
    pub fn with_id(self, id: PetId) -> Pet {
        Pet {
            id,
            client_id: self.client_id,
            name: self.name,
            food_type: self.food_type,
            last_tick_medicine: self.last_tick_medicine,
            rabies_vaccine: self.rabies_vaccine,
            vaccine_history: self.vaccine_history,
        }
    }
}

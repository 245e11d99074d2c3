// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay records derived from appointments.

use crate::entity::{Entity, EntityKind};
use crate::formats::iso_date;
use crate::ids::{AppointmentId, CommissionId, GroomerId, PointsRecordId};
use crate::money::Money;
use crate::types::{Points, YearMonth};
use serde::{Deserialize, Serialize};
use time::Date;

/// Pay earned by a groomer for completing an appointment.
///
/// Posted once when the appointment first reaches `completed` and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    /// The commission identifier.
    pub id: CommissionId,
    /// The groomer paid.
    pub groomer_id: GroomerId,
    /// The completed appointment.
    pub appointment_id: AppointmentId,
    /// Amount earned.
    pub value: Money,
    /// Day of completion, not the appointment day.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl Commission {
    /// Returns true if the commission was posted in `period`.
    #[must_use]
    pub fn falls_in(&self, period: YearMonth) -> bool {
        period.contains(self.date)
    }
}

impl Entity for Commission {
    type Id = CommissionId;
    const KIND: EntityKind = EntityKind::Commission;

    fn id(&self) -> &CommissionId {
        &self.id
    }
}

/// Complexity points earned by a groomer for an appointment.
///
/// At most one record exists per appointment; re-rating replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsRecord {
    /// The record identifier.
    pub id: PointsRecordId,
    /// The groomer credited.
    pub groomer_id: GroomerId,
    /// The rated appointment.
    pub appointment_id: AppointmentId,
    /// Points value.
    pub points: Points,
    /// Day the rating was recorded.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl PointsRecord {
    /// Returns true if the record was posted in `period`.
    #[must_use]
    pub fn falls_in(&self, period: YearMonth) -> bool {
        period.contains(self.date)
    }
}

impl Entity for PointsRecord {
    type Id = PointsRecordId;
    const KIND: EntityKind = EntityKind::Points;

    fn id(&self) -> &PointsRecordId {
        &self.id
    }
}

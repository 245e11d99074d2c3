// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commission and points ledgers.
//!
//! Both are keyed by groomer and filtered by calendar month of the record
//! date. A commission is written once per appointment; a points record is
//! upserted per appointment.

use crate::store::EntityStore;
use petgroom_domain::{
    AppointmentId, Commission, CommissionId, GroomerId, Money, Points, PointsRecord,
    PointsRecordId, YearMonth,
};
use serde::{Deserialize, Serialize};
use time::Date;

fn in_period(date: Date, period: Option<YearMonth>) -> bool {
    period.is_none_or(|period| period.contains(date))
}

/// Pay earned by groomers, one row per completed appointment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommissionLedger {
    records: EntityStore<Commission>,
}

impl CommissionLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: EntityStore::new(),
        }
    }

    /// Appends a commission row and returns it.
    ///
    /// # Arguments
    ///
    /// * `groomer_id` - The groomer earning the commission
    /// * `appointment_id` - The completed appointment
    /// * `value` - Amount earned
    /// * `date` - Day of completion
    pub fn post(
        &mut self,
        groomer_id: GroomerId,
        appointment_id: AppointmentId,
        value: Money,
        date: Date,
    ) -> Commission {
        let commission: Commission = Commission {
            id: CommissionId::generate(),
            groomer_id,
            appointment_id,
            value,
            date,
        };
        self.records.insert(commission.clone());
        commission
    }

    /// Returns the commission posted for an appointment, if any.
    #[must_use]
    pub fn for_appointment(&self, appointment_id: &AppointmentId) -> Option<&Commission> {
        self.records
            .iter()
            .find(|commission| &commission.appointment_id == appointment_id)
    }

    /// Returns a groomer's commissions, optionally limited to one month.
    #[must_use]
    pub fn for_groomer(&self, groomer_id: &GroomerId, period: Option<YearMonth>) -> Vec<&Commission> {
        self.records
            .iter()
            .filter(|commission| {
                &commission.groomer_id == groomer_id && in_period(commission.date, period)
            })
            .collect()
    }

    /// Sums a groomer's commissions, optionally limited to one month.
    #[must_use]
    pub fn total_for_groomer(&self, groomer_id: &GroomerId, period: Option<YearMonth>) -> Money {
        self.for_groomer(groomer_id, period)
            .into_iter()
            .map(|commission| commission.value)
            .sum()
    }

    /// Returns every commission posted in a month.
    #[must_use]
    pub fn in_month(&self, period: YearMonth) -> Vec<&Commission> {
        self.records
            .iter()
            .filter(|commission| commission.falls_in(period))
            .collect()
    }

    /// Deletes the rows derived from an appointment. Returns how many were removed.
    pub fn remove_for_appointment(&mut self, appointment_id: &AppointmentId) -> usize {
        self.records
            .remove_where(|commission| &commission.appointment_id == appointment_id)
    }

    /// Returns every row in posting order.
    #[must_use]
    pub fn list(&self) -> &[Commission] {
        self.records.list()
    }
}

/// Complexity points earned by groomers, at most one row per appointment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsLedger {
    records: EntityStore<PointsRecord>,
}

impl PointsLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: EntityStore::new(),
        }
    }

    /// Records points for an appointment.
    ///
    /// An existing row for the appointment is updated in place: its value
    /// and groomer are replaced and its original date is kept.
    pub fn upsert(
        &mut self,
        groomer_id: GroomerId,
        appointment_id: AppointmentId,
        points: Points,
        date: Date,
    ) -> PointsRecord {
        if let Some(record) = self
            .records
            .find_mut(|record| record.appointment_id == appointment_id)
        {
            record.points = points;
            record.groomer_id = groomer_id;
            return record.clone();
        }

        let record: PointsRecord = PointsRecord {
            id: PointsRecordId::generate(),
            groomer_id,
            appointment_id,
            points,
            date,
        };
        self.records.insert(record.clone());
        record
    }

    /// Returns the points row for an appointment, if any.
    #[must_use]
    pub fn for_appointment(&self, appointment_id: &AppointmentId) -> Option<&PointsRecord> {
        self.records
            .iter()
            .find(|record| &record.appointment_id == appointment_id)
    }

    /// Returns a groomer's points rows, optionally limited to one month.
    #[must_use]
    pub fn for_groomer(&self, groomer_id: &GroomerId, period: Option<YearMonth>) -> Vec<&PointsRecord> {
        self.records
            .iter()
            .filter(|record| &record.groomer_id == groomer_id && in_period(record.date, period))
            .collect()
    }

    /// Sums a groomer's points, optionally limited to one month.
    #[must_use]
    pub fn total_for_groomer(&self, groomer_id: &GroomerId, period: Option<YearMonth>) -> u32 {
        self.for_groomer(groomer_id, period)
            .into_iter()
            .map(|record| u32::from(record.points.value()))
            .sum()
    }

    /// Returns every points row recorded in a month.
    #[must_use]
    pub fn in_month(&self, period: YearMonth) -> Vec<&PointsRecord> {
        self.records
            .iter()
            .filter(|record| record.falls_in(period))
            .collect()
    }

    /// Deletes the row derived from an appointment. Returns how many were removed.
    pub fn remove_for_appointment(&mut self, appointment_id: &AppointmentId) -> usize {
        self.records
            .remove_where(|record| &record.appointment_id == appointment_id)
    }

    /// Returns every row in recording order.
    #[must_use]
    pub fn list(&self) -> &[PointsRecord] {
        self.records.list()
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Lifecycle state of an appointment.
///
/// Status only moves forward: `waiting → progress → completed`, with a direct
/// `waiting → completed` allowed once a groomer is assigned. `completed` and
/// `canceled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked, not yet started.
    #[default]
    Waiting,
    /// A groomer is working on it.
    Progress,
    /// Service finished. Terminal.
    Completed,
    /// Called off before completion. Terminal.
    Canceled,
}

impl AppointmentStatus {
    /// Returns the string representation used on the wire and in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Progress => "progress",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    /// Returns true while the appointment still represents open work.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Waiting | Self::Progress)
    }

    /// Returns true if no further status change is permitted.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// Validates a status change requested by an update.
    ///
    /// Re-saving the current status is always accepted, so corrections to
    /// other fields of a completed appointment still go through.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` for backward moves,
    /// moves out of a terminal state, and `waiting → completed` without a
    /// groomer.
    pub const fn validate_transition(
        self,
        target: Self,
        has_groomer: bool,
    ) -> Result<(), DomainError> {
        let rejection: Option<&'static str> = match (self, target) {
            (Self::Waiting, Self::Waiting)
            | (Self::Progress, Self::Progress)
            | (Self::Completed, Self::Completed)
            | (Self::Canceled, Self::Canceled)
            | (Self::Waiting | Self::Progress, Self::Canceled)
            | (Self::Waiting, Self::Progress)
            | (Self::Progress, Self::Completed) => None,
            (Self::Waiting, Self::Completed) => {
                if has_groomer {
                    None
                } else {
                    Some("a groomer must be assigned before completion")
                }
            }
            _ if self.is_terminal() => Some("status is terminal"),
            _ => Some("status only moves forward"),
        };

        match rejection {
            None => Ok(()),
            Some(reason) => Err(DomainError::InvalidStatusTransition {
                from: self,
                to: target,
                reason,
            }),
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of service booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Bath only.
    Bath,
    /// Grooming only.
    Grooming,
    /// Bath and grooming.
    Both,
    /// Covered by a package; the package sets the price.
    Package,
}

impl ServiceType {
    /// Returns the string representation used on the wire and in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bath => "bath",
            Self::Grooming => "grooming",
            Self::Both => "both",
            Self::Package => "package",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the pet reaches the salon for a package appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// The client brings the pet in.
    #[default]
    Client,
    /// The salon collects the pet.
    Pickup,
}

/// Whether a groomer can take new work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroomerStatus {
    /// Eligible for auto-assignment.
    #[default]
    Available,
    /// Skipped by auto-assignment.
    Busy,
}

/// Complexity rating of a service, from 1 (simple) to 3 (demanding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Points(u8);

impl Points {
    /// Creates a points rating.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPoints` if `value` is outside 1..=3.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value >= 1 && value <= 3 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPoints { value })
        }
    }

    /// Returns the rating.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Points {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Points> for u8 {
    fn from(points: Points) -> Self {
        points.0
    }
}

/// A groomer's commission as a whole percentage of the appointment price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CommissionRate(u8);

impl CommissionRate {
    /// Creates a commission rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCommissionRate` if `percent` exceeds 100.
    pub const fn new(percent: u8) -> Result<Self, DomainError> {
        if percent <= 100 {
            Ok(Self(percent))
        } else {
            Err(DomainError::InvalidCommissionRate { value: percent })
        }
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CommissionRate {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommissionRate> for u8 {
    fn from(rate: CommissionRate) -> Self {
        rate.0
    }
}

/// A calendar month of a specific year, used to filter the ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Creates a period from a year and a `time::Month`.
    #[must_use]
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Creates a period from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if `month` is outside 1..=12.
    pub fn from_numbers(year: i32, month: u8) -> Result<Self, DomainError> {
        let month: Month = Month::try_from(month).map_err(|_| DomainError::InvalidMonth { month })?;
        Ok(Self { year, month })
    }

    /// Returns the period containing `date`.
    #[must_use]
    pub const fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns true if `date` falls within this calendar month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

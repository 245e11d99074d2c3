// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use petgroom_domain::{Appointment, AppointmentStatus, GroomerId};
use time::Date;

/// Which groomer column an appointment must fall in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroomerFilter {
    /// Any groomer, or none.
    #[default]
    Any,
    /// No groomer assigned.
    Unassigned,
    /// Assigned to this groomer.
    Groomer(GroomerId),
}

/// Criteria for listing appointments. Unset criteria match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppointmentFilter {
    /// Service day.
    pub date: Option<Date>,
    /// Lifecycle state.
    pub status: Option<AppointmentStatus>,
    /// Assigned groomer.
    pub groomer: GroomerFilter,
}

impl AppointmentFilter {
    /// Returns true if `appointment` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, appointment: &Appointment) -> bool {
        let groomer_matches: bool = match &self.groomer {
            GroomerFilter::Any => true,
            GroomerFilter::Unassigned => appointment.groomer_id.is_none(),
            GroomerFilter::Groomer(groomer_id) => {
                appointment.groomer_id.as_ref() == Some(groomer_id)
            }
        };
        groomer_matches
            && self.date.is_none_or(|date| appointment.date == date)
            && self.status.is_none_or(|status| appointment.status == status)
    }
}

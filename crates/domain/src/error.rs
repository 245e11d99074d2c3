// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::AppointmentStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Points must be an integer between 1 and 3.
    #[error("Invalid points value {value}: must be between 1 and 3")]
    InvalidPoints {
        /// The rejected value.
        value: u8,
    },
    /// Commission rate must be a percentage between 0 and 100.
    #[error("Invalid commission rate {value}: must be between 0 and 100")]
    InvalidCommissionRate {
        /// The rejected value.
        value: u8,
    },
    /// A client must list at least one pet name.
    #[error("Client '{tutor_name}' must have at least one pet name")]
    MissingPetNames {
        /// The tutor whose record was rejected.
        tutor_name: String,
    },
    /// Month number outside 1..=12.
    #[error("Invalid month {month}: must be between 1 and 12")]
    InvalidMonth {
        /// The rejected month number.
        month: u8,
    },
    /// The requested status change is not permitted by the appointment lifecycle.
    #[error("Cannot move appointment from {from} to {to}: {reason}")]
    InvalidStatusTransition {
        /// The current status.
        from: AppointmentStatus,
        /// The requested status.
        to: AppointmentStatus,
        /// Why the move was rejected.
        reason: &'static str,
    },
}

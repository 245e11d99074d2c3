// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The appointment engine.
//!
//! Every function here mutates a staged `State`. Callers discard the staged
//! state on error, so a failed call never leaves partial changes behind.

use crate::error::CoreError;
use crate::state::State;
use petgroom_domain::{
    Appointment, AppointmentId, AppointmentStatus, Commission, EntityKind, Groomer, GroomerId,
    Money, NewAppointment,
};
use serde::Serialize;
use time::Date;
use tracing::{debug, info};

/// A groomer chosen for an appointment by auto-assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// The assigned appointment.
    pub appointment_id: AppointmentId,
    /// The chosen groomer.
    pub groomer_id: GroomerId,
}

/// Books a new appointment.
///
/// Status defaults to `waiting`. When a groomer and points are both given,
/// a points record is posted immediately.
///
/// # Arguments
///
/// * `state` - The staged state
/// * `new` - The appointment fields
/// * `today` - Date used for derived ledger rows
///
/// # Errors
///
/// Returns `CoreError::UnknownReference` if the client, groomer or package
/// does not exist.
pub fn create_appointment(
    state: &mut State,
    new: NewAppointment,
    today: Date,
) -> Result<Appointment, CoreError> {
    let appointment: Appointment = new.with_id(AppointmentId::generate());
    validate_references(state, &appointment)?;

    if let (Some(groomer_id), Some(points)) = (&appointment.groomer_id, appointment.points) {
        state
            .points
            .upsert(groomer_id.clone(), appointment.id.clone(), points, today);
    }

    state.appointments.insert(appointment.clone());
    info!(appointment_id = %appointment.id, date = %appointment.date, "Appointment created");
    Ok(appointment)
}

/// Stores a new version of an existing appointment.
///
/// The first transition into `completed` with a groomer assigned posts one
/// commission of `price × rate / 100`, dated `today`. The guard is the
/// stored status, so re-saving a completed appointment posts nothing.
/// A points change, or a groomer change while points are set, upserts the
/// appointment's points record; clearing the points or the groomer removes
/// it. All other field edits apply as given.
///
/// # Arguments
///
/// * `state` - The staged state
/// * `appointment` - The full new version
/// * `today` - Date used for derived ledger rows
///
/// # Errors
///
/// Returns an error if:
/// - The appointment does not exist
/// - A referenced client, groomer or package does not exist
/// - The status change is not permitted
pub fn update_appointment(
    state: &mut State,
    appointment: Appointment,
    today: Date,
) -> Result<Appointment, CoreError> {
    let appointment: Appointment = appointment.normalized();
    let old: Appointment = state.appointments.require(&appointment.id)?.clone();

    validate_references(state, &appointment)?;
    old.status
        .validate_transition(appointment.status, appointment.groomer_id.is_some())?;

    if let Some(groomer_id) = &appointment.groomer_id {
        let completing: bool = old.status != AppointmentStatus::Completed
            && appointment.status == AppointmentStatus::Completed;
        if completing {
            let groomer: &Groomer = state.groomers.require(groomer_id)?;
            let value: Money = appointment.price.percentage(groomer.commission_rate);
            let commission: Commission = state.commissions.post(
                groomer_id.clone(),
                appointment.id.clone(),
                value,
                today,
            );
            info!(
                appointment_id = %appointment.id,
                groomer_id = %groomer_id,
                value = %commission.value,
                "Commission posted"
            );
        }

        if let Some(points) = appointment.points
            && (appointment.points != old.points || appointment.groomer_id != old.groomer_id)
        {
            state
                .points
                .upsert(groomer_id.clone(), appointment.id.clone(), points, today);
            debug!(
                appointment_id = %appointment.id,
                groomer_id = %groomer_id,
                points = points.value(),
                "Points recorded"
            );
        }
    }

    if (appointment.points.is_none() || appointment.groomer_id.is_none())
        && state.points.for_appointment(&appointment.id).is_some()
    {
        state.points.remove_for_appointment(&appointment.id);
        debug!(appointment_id = %appointment.id, "Points record removed");
    }

    state.appointments.replace(appointment.clone())?;
    Ok(appointment)
}

/// Deletes an appointment together with its commission and points rows.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the appointment does not exist.
pub fn delete_appointment(
    state: &mut State,
    appointment_id: &AppointmentId,
) -> Result<Appointment, CoreError> {
    let removed: Appointment = state.appointments.remove(appointment_id)?;
    let commissions: usize = state.commissions.remove_for_appointment(appointment_id);
    let points: usize = state.points.remove_for_appointment(appointment_id);
    info!(
        appointment_id = %appointment_id,
        commissions,
        points,
        "Appointment deleted"
    );
    Ok(removed)
}

/// Picks the available groomer with the fewest open appointments.
///
/// Ties go to the groomer listed first on the roster.
///
/// # Errors
///
/// Returns `CoreError::NoGroomerAvailable` if no groomer is available.
pub fn least_loaded_groomer(state: &State) -> Result<GroomerId, CoreError> {
    state
        .groomers
        .iter()
        .filter(|groomer| groomer.is_available())
        .map(|groomer| (state.workload(&groomer.id), groomer))
        // min_by_key keeps the first of equal minima
        .min_by_key(|(workload, _)| *workload)
        .map(|(_, groomer)| groomer.id.clone())
        .ok_or(CoreError::NoGroomerAvailable)
}

/// Assigns the least-loaded available groomer to an appointment.
///
/// Status is left unchanged.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the appointment does not exist and
/// `CoreError::NoGroomerAvailable` if no groomer is available.
pub fn auto_assign(
    state: &mut State,
    appointment_id: &AppointmentId,
    today: Date,
) -> Result<Assignment, CoreError> {
    let mut appointment: Appointment = state.appointments.require(appointment_id)?.clone();
    let groomer_id: GroomerId = least_loaded_groomer(state)?;

    appointment.groomer_id = Some(groomer_id.clone());
    update_appointment(state, appointment, today)?;
    debug!(appointment_id = %appointment_id, groomer_id = %groomer_id, "Groomer auto-assigned");

    Ok(Assignment {
        appointment_id: appointment_id.clone(),
        groomer_id,
    })
}

/// Auto-assigns every open, unassigned appointment on `date`, in creation
/// order.
///
/// # Errors
///
/// Returns `CoreError::NoGroomerAvailable` if there is work to assign but
/// no groomer is available.
pub fn auto_assign_unassigned(
    state: &mut State,
    date: Date,
    today: Date,
) -> Result<Vec<Assignment>, CoreError> {
    let pending: Vec<AppointmentId> = state
        .appointments
        .iter()
        .filter(|appointment| {
            appointment.date == date && appointment.is_unassigned() && appointment.status.is_open()
        })
        .map(|appointment| appointment.id.clone())
        .collect();

    pending
        .iter()
        .map(|appointment_id| auto_assign(state, appointment_id, today))
        .collect()
}

/// Assigns a specific groomer and starts a waiting appointment.
///
/// Mirrors dropping an appointment onto a groomer's column: a `waiting`
/// appointment moves to `progress`; other statuses are kept.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the appointment or groomer does not
/// exist.
pub fn assign_groomer(
    state: &mut State,
    appointment_id: &AppointmentId,
    groomer_id: &GroomerId,
    today: Date,
) -> Result<Appointment, CoreError> {
    state.groomers.require(groomer_id)?;
    let mut appointment: Appointment = state.appointments.require(appointment_id)?.clone();

    appointment.groomer_id = Some(groomer_id.clone());
    if appointment.status == AppointmentStatus::Waiting {
        appointment.status = AppointmentStatus::Progress;
    }
    update_appointment(state, appointment, today)
}

fn validate_references(state: &State, appointment: &Appointment) -> Result<(), CoreError> {
    if !state.clients.contains(&appointment.client_id) {
        return Err(CoreError::UnknownReference {
            entity: EntityKind::Client,
            id: appointment.client_id.to_string(),
        });
    }
    if let Some(groomer_id) = &appointment.groomer_id
        && !state.groomers.contains(groomer_id)
    {
        return Err(CoreError::UnknownReference {
            entity: EntityKind::Groomer,
            id: groomer_id.to_string(),
        });
    }
    if let Some(package_id) = &appointment.package_id
        && !state.packages.contains(package_id)
    {
        return Err(CoreError::UnknownReference {
            entity: EntityKind::Package,
            id: package_id.to_string(),
        });
    }
    Ok(())
}

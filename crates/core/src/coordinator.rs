// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delete guards.
//!
//! A delete is vetoed while any appointment (or, for clients, any pet)
//! still points at the target.

use crate::error::CoreError;
use crate::state::State;
use petgroom_domain::{
    Client, ClientId, Entity, EntityKind, Groomer, GroomerId, Package, PackageId, Pet, PetId,
};
use tracing::info;

fn conflict<T: Entity>(id: &T::Id, referenced_by: EntityKind, count: usize) -> CoreError {
    CoreError::ReferentialConflict {
        entity: T::KIND,
        id: id.to_string(),
        referenced_by,
        count,
    }
}

/// Deletes a groomer no appointment refers to.
///
/// # Errors
///
/// Returns `CoreError::ReferentialConflict` if any appointment is assigned
/// to the groomer, or `CoreError::NotFound` if it does not exist.
pub fn delete_groomer(state: &mut State, groomer_id: &GroomerId) -> Result<Groomer, CoreError> {
    let count: usize = state
        .appointments
        .iter()
        .filter(|appointment| appointment.groomer_id.as_ref() == Some(groomer_id))
        .count();
    if count > 0 {
        return Err(conflict::<Groomer>(groomer_id, EntityKind::Appointment, count));
    }

    let removed: Groomer = state.groomers.remove(groomer_id)?;
    info!(groomer_id = %groomer_id, "Groomer deleted");
    Ok(removed)
}

/// Deletes a package no appointment refers to.
///
/// # Errors
///
/// Returns `CoreError::ReferentialConflict` if any appointment uses the
/// package, or `CoreError::NotFound` if it does not exist.
pub fn delete_package(state: &mut State, package_id: &PackageId) -> Result<Package, CoreError> {
    let count: usize = state
        .appointments
        .iter()
        .filter(|appointment| appointment.package_id.as_ref() == Some(package_id))
        .count();
    if count > 0 {
        return Err(conflict::<Package>(package_id, EntityKind::Appointment, count));
    }

    let removed: Package = state.packages.remove(package_id)?;
    info!(package_id = %package_id, "Package deleted");
    Ok(removed)
}

/// Deletes a client with no appointments and no pets.
///
/// Appointments are checked before pets.
///
/// # Errors
///
/// Returns `CoreError::ReferentialConflict` if an appointment or pet
/// refers to the client, or `CoreError::NotFound` if it does not exist.
pub fn delete_client(state: &mut State, client_id: &ClientId) -> Result<Client, CoreError> {
    let appointments: usize = state
        .appointments
        .iter()
        .filter(|appointment| &appointment.client_id == client_id)
        .count();
    if appointments > 0 {
        return Err(conflict::<Client>(
            client_id,
            EntityKind::Appointment,
            appointments,
        ));
    }

    let pets: usize = state
        .pets
        .iter()
        .filter(|pet| &pet.client_id == client_id)
        .count();
    if pets > 0 {
        return Err(conflict::<Client>(client_id, EntityKind::Pet, pets));
    }

    let removed: Client = state.clients.remove(client_id)?;
    info!(client_id = %client_id, "Client deleted");
    Ok(removed)
}

/// Deletes a pet whose name no appointment carries.
///
/// Appointments store the pet's name rather than its id, so any appointment
/// with the same pet name blocks the delete, even one booked for a
/// different client's pet.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the pet does not exist, or
/// `CoreError::ReferentialConflict` if an appointment carries its name.
pub fn delete_pet(state: &mut State, pet_id: &PetId) -> Result<Pet, CoreError> {
    let name: String = state.pets.require(pet_id)?.name.clone();
    let count: usize = state
        .appointments
        .iter()
        .filter(|appointment| appointment.pet_name == name)
        .count();
    if count > 0 {
        return Err(conflict::<Pet>(pet_id, EntityKind::Appointment, count));
    }

    let removed: Pet = state.pets.remove(pet_id)?;
    info!(pet_id = %pet_id, "Pet deleted");
    Ok(removed)
}

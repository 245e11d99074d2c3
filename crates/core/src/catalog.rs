// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Add and update operations for clients, pets, groomers and packages.

use crate::error::CoreError;
use crate::state::State;
use petgroom_domain::{
    Client, ClientId, EntityKind, Groomer, GroomerId, NewClient, NewGroomer, NewPackage, NewPet,
    Package, PackageId, Pet, PetId, validate_client,
};
use tracing::info;

/// Adds a client.
///
/// # Errors
///
/// Returns `CoreError::Domain` if the client lists no pet names.
pub fn add_client(state: &mut State, new: NewClient) -> Result<Client, CoreError> {
    let client: Client = new.with_id(ClientId::generate());
    validate_client(&client)?;
    state.clients.insert(client.clone());
    info!(client_id = %client.id, "Client added");
    Ok(client)
}

/// Replaces a client.
///
/// # Errors
///
/// Returns an error if the client does not exist or lists no pet names.
pub fn update_client(state: &mut State, client: Client) -> Result<Client, CoreError> {
    validate_client(&client)?;
    state.clients.replace(client.clone())?;
    Ok(client)
}

/// Adds a pet to an existing client.
///
/// # Errors
///
/// Returns `CoreError::UnknownReference` if the owning client does not exist.
pub fn add_pet(state: &mut State, new: NewPet) -> Result<Pet, CoreError> {
    require_client(state, &new.client_id)?;
    let pet: Pet = new.with_id(PetId::generate());
    state.pets.insert(pet.clone());
    info!(pet_id = %pet.id, client_id = %pet.client_id, "Pet added");
    Ok(pet)
}

/// Replaces a pet.
///
/// # Errors
///
/// Returns an error if the pet or its owning client does not exist.
pub fn update_pet(state: &mut State, pet: Pet) -> Result<Pet, CoreError> {
    require_client(state, &pet.client_id)?;
    state.pets.replace(pet.clone())?;
    Ok(pet)
}

/// Returns a client's pets in insertion order.
#[must_use]
pub fn pets_for_client<'a>(state: &'a State, client_id: &ClientId) -> Vec<&'a Pet> {
    state
        .pets
        .iter()
        .filter(|pet| &pet.client_id == client_id)
        .collect()
}

/// Adds a groomer to the end of the roster.
pub fn add_groomer(state: &mut State, new: NewGroomer) -> Groomer {
    let groomer: Groomer = new.with_id(GroomerId::generate());
    state.groomers.insert(groomer.clone());
    info!(groomer_id = %groomer.id, "Groomer added");
    groomer
}

/// Replaces a groomer, keeping its roster position.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the groomer does not exist.
pub fn update_groomer(state: &mut State, groomer: Groomer) -> Result<Groomer, CoreError> {
    state.groomers.replace(groomer.clone())?;
    Ok(groomer)
}

/// Adds a package.
pub fn add_package(state: &mut State, new: NewPackage) -> Package {
    let package: Package = new.with_id(PackageId::generate());
    state.packages.insert(package.clone());
    info!(package_id = %package.id, "Package added");
    package
}

/// Replaces a package.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the package does not exist.
pub fn update_package(state: &mut State, package: Package) -> Result<Package, CoreError> {
    state.packages.replace(package.clone())?;
    Ok(package)
}

fn require_client(state: &State, client_id: &ClientId) -> Result<(), CoreError> {
    if state.clients.contains(client_id) {
        Ok(())
    } else {
        Err(CoreError::UnknownReference {
            entity: EntityKind::Client,
            id: client_id.to_string(),
        })
    }
}

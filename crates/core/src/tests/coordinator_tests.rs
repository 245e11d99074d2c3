// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Referential guards on destructive operations.

use super::helpers::{
    TestSalon, create_test_appointment, create_test_client, create_test_groomer,
    create_test_package, create_test_pet, create_test_salon,
};
use crate::CoreError;
use petgroom_domain::{
    Appointment, Client, ClientId, EntityKind, Groomer, NewPet, Package, Pet, PetId,
    RabiesVaccine,
};

#[test]
fn test_delete_referenced_groomer_is_rejected() {
    let mut salon: TestSalon = create_test_salon();
    let client: Client = create_test_client(&mut salon, "Ana", "Rex");
    let groomer: Groomer = create_test_groomer(&mut salon, "Bia", 10);
    let appointment: Appointment = create_test_appointment(&mut salon, &client);
    salon.assign_groomer(&appointment.id, &groomer.id).unwrap();

    let result: Result<Groomer, CoreError> = salon.delete_groomer(&groomer.id);

    assert_eq!(
        result,
        Err(CoreError::ReferentialConflict {
            entity: EntityKind::Groomer,
            id: groomer.id.to_string(),
            referenced_by: EntityKind::Appointment,
            count: 1,
        })
    );
    assert!(salon.get_groomer(&groomer.id).is_some());
}

#[test]
fn test_delete_unreferenced_groomer_succeeds() {
    let mut salon: TestSalon = create_test_salon();
    let kept: Groomer = create_test_groomer(&mut salon, "Bia", 10);
    let groomer: Groomer = create_test_groomer(&mut salon, "Caio", 10);

    salon.delete_groomer(&groomer.id).unwrap();

    assert_eq!(salon.list_groomers(), std::slice::from_ref(&kept));
}

#[test]
fn test_groomer_becomes_deletable_after_appointment_deleted() {
    let mut salon: TestSalon = create_test_salon();
    let client: Client = create_test_client(&mut salon, "Ana", "Rex");
    let groomer: Groomer = create_test_groomer(&mut salon, "Bia", 10);
    let appointment: Appointment = create_test_appointment(&mut salon, &client);
    salon.assign_groomer(&appointment.id, &groomer.id).unwrap();

    assert!(salon.delete_groomer(&groomer.id).is_err());
    salon.delete_appointment(&appointment.id).unwrap();
    assert!(salon.delete_groomer(&groomer.id).is_ok());
}

#[test]
fn test_delete_referenced_package_is_rejected() {
    let mut salon: TestSalon = create_test_salon();
    let client: Client = create_test_client(&mut salon, "Ana", "Rex");
    let package: Package = create_test_package(&mut salon);
    let mut appointment: Appointment = create_test_appointment(&mut salon, &client);
    appointment.package_id = Some(package.id.clone());
    salon.update_appointment(appointment).unwrap();

    let result: Result<Package, CoreError> = salon.delete_package(&package.id);

    assert!(matches!(
        result,
        Err(CoreError::ReferentialConflict {
            entity: EntityKind::Package,
            referenced_by: EntityKind::Appointment,
            count: 1,
            ..
        })
    ));
    assert_eq!(salon.list_packages().len(), 1);
}

#[test]
fn test_delete_unreferenced_package_succeeds() {
    let mut salon: TestSalon = create_test_salon();
    let package: Package = create_test_package(&mut salon);
    salon.delete_package(&package.id).unwrap();
    assert!(salon.list_packages().is_empty());
}

#[test]
fn test_delete_client_with_appointments_is_rejected() {
    let mut salon: TestSalon = create_test_salon();
    let client: Client = create_test_client(&mut salon, "Ana", "Rex");
    create_test_pet(&mut salon, &client, "Rex");
    create_test_appointment(&mut salon, &client);
    create_test_appointment(&mut salon, &client);

    let result: Result<Client, CoreError> = salon.delete_client(&client.id);

    assert!(matches!(
        result,
        Err(CoreError::ReferentialConflict {
            entity: EntityKind::Client,
            referenced_by: EntityKind::Appointment,
            count: 2,
            ..
        })
    ));
}

#[test]
fn test_delete_client_with_pets_is_rejected() {
    let mut salon: TestSalon = create_test_salon();
    let client: Client = create_test_client(&mut salon, "Ana", "Rex");
    create_test_pet(&mut salon, &client, "Rex");

    let result: Result<Client, CoreError> = salon.delete_client(&client.id);

    assert!(matches!(
        result,
        Err(CoreError::ReferentialConflict {
            referenced_by: EntityKind::Pet,
            count: 1,
            ..
        })
    ));
    assert!(salon.get_client(&client.id).is_some());
}

#[test]
fn test_delete_unreferenced_client_succeeds() {
    let mut salon: TestSalon = create_test_salon();
    let client: Client = create_test_client(&mut salon, "Ana", "Rex");
    salon.delete_client(&client.id).unwrap();
    assert!(salon.list_clients().is_empty());
}

#[test]
fn test_delete_missing_client_is_not_found() {
    let mut salon: TestSalon = create_test_salon();
    let result: Result<Client, CoreError> = salon.delete_client(&ClientId::new("ghost"));
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[test]
fn test_delete_pet_named_in_appointment_is_rejected() {
    let mut salon: TestSalon = create_test_salon();
    let client: Client = create_test_client(&mut salon, "Ana", "Rex");
    let pet: Pet = create_test_pet(&mut salon, &client, "Rex");
    create_test_appointment(&mut salon, &client);

    let result: Result<Pet, CoreError> = salon.delete_pet(&pet.id);

    assert!(matches!(
        result,
        Err(CoreError::ReferentialConflict {
            entity: EntityKind::Pet,
            ..
        })
    ));
}

#[test]
fn test_pet_guard_matches_by_name_across_clients() {
    let mut salon: TestSalon = create_test_salon();
    let ana: Client = create_test_client(&mut salon, "Ana", "Rex");
    let bruno: Client = create_test_client(&mut salon, "Bruno", "Rex");
    let brunos_rex: Pet = create_test_pet(&mut salon, &bruno, "Rex");
    create_test_appointment(&mut salon, &ana);

    assert!(salon.delete_pet(&brunos_rex.id).is_err());
}

#[test]
fn test_delete_pet_without_appointments_succeeds() {
    let mut salon: TestSalon = create_test_salon();
    let client: Client = create_test_client(&mut salon, "Ana", "Rex");
    let pet: Pet = create_test_pet(&mut salon, &client, "Mia");
    create_test_appointment(&mut salon, &client);

    salon.delete_pet(&pet.id).unwrap();
    assert!(salon.list_pets().is_empty());
    assert!(salon.delete_pet(&PetId::new("ghost")).is_err());
}

#[test]
fn test_add_pet_for_unknown_client_is_rejected() {
    let mut salon: TestSalon = create_test_salon();
    let result: Result<Pet, CoreError> = salon.add_pet(NewPet {
        client_id: ClientId::new("ghost"),
        name: String::from("Rex"),
        food_type: String::new(),
        last_tick_medicine: None,
        rabies_vaccine: RabiesVaccine::default(),
        vaccine_history: Vec::new(),
    });

    assert_eq!(
        result,
        Err(CoreError::UnknownReference {
            entity: EntityKind::Client,
            id: String::from("ghost"),
        })
    );
}

#[test]
fn test_pets_for_client() {
    let mut salon: TestSalon = create_test_salon();
    let ana: Client = create_test_client(&mut salon, "Ana", "Rex");
    let bruno: Client = create_test_client(&mut salon, "Bruno", "Tom");
    create_test_pet(&mut salon, &ana, "Rex");
    create_test_pet(&mut salon, &bruno, "Tom");
    create_test_pet(&mut salon, &ana, "Mia");

    let names: Vec<String> = salon
        .pets_for_client(&ana.id)
        .unwrap()
        .into_iter()
        .map(|pet| pet.name.clone())
        .collect();
    assert_eq!(names, vec![String::from("Rex"), String::from("Mia")]);
    assert!(salon.pets_for_client(&ClientId::new("ghost")).is_err());
}

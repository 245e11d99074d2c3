// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Client, ClientId, DomainError, NewClient, validate_client};

fn create_test_client(pet_names: &[&str]) -> Client {
    NewClient {
        tutor_name: String::from("Ana Souza"),
        pet_names: pet_names.iter().map(|name| String::from(*name)).collect(),
        tax_id: None,
        phone: String::from("555-0100"),
        email: String::from("ana@example.com"),
        address: String::from("Rua A, 1"),
    }
    .with_id(ClientId::new("client-1"))
}

#[test]
fn test_client_with_pet_is_valid() {
    assert!(validate_client(&create_test_client(&["Rex"])).is_ok());
    assert!(validate_client(&create_test_client(&["", "Mia"])).is_ok());
}

#[test]
fn test_client_without_pets_is_rejected() {
    let result: Result<(), DomainError> = validate_client(&create_test_client(&[]));
    assert!(matches!(result, Err(DomainError::MissingPetNames { .. })));
}

#[test]
fn test_client_with_only_blank_names_is_rejected() {
    assert!(validate_client(&create_test_client(&["  ", ""])).is_err());
}

#[test]
fn test_invoicing_requires_tax_id() {
    let mut client: Client = create_test_client(&["Rex"]);
    assert!(!client.can_be_invoiced());
    client.tax_id = Some(String::from("   "));
    assert!(!client.can_be_invoiced());
    client.tax_id = Some(String::from("123.456.789-09"));
    assert!(client.can_be_invoiced());
}

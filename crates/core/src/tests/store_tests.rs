// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, EntityStore};
use petgroom_domain::{
    CommissionRate, EntityKind, Groomer, GroomerId, GroomerStatus, NewGroomer,
};

fn groomer(id: &str, name: &str) -> Groomer {
    NewGroomer {
        name: String::from(name),
        status: GroomerStatus::Available,
        commission_rate: CommissionRate::new(10).unwrap(),
    }
    .with_id(GroomerId::new(id))
}

#[test]
fn test_store_preserves_insertion_order() {
    let mut store: EntityStore<Groomer> = EntityStore::new();
    store.insert(groomer("b", "Bia"));
    store.insert(groomer("a", "Ana"));
    store.insert(groomer("c", "Caio"));

    let names: Vec<&str> = store.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Bia", "Ana", "Caio"]);
}

#[test]
fn test_replace_keeps_position_and_returns_previous() {
    let mut store: EntityStore<Groomer> = EntityStore::new();
    store.insert(groomer("a", "Ana"));
    store.insert(groomer("b", "Bia"));

    let mut renamed: Groomer = groomer("a", "Ana Paula");
    renamed.status = GroomerStatus::Busy;
    let previous: Groomer = store.replace(renamed).unwrap();

    assert_eq!(previous.name, "Ana");
    assert_eq!(store.list()[0].name, "Ana Paula");
    assert_eq!(store.list()[1].name, "Bia");
}

#[test]
fn test_replace_missing_record_is_not_found() {
    let mut store: EntityStore<Groomer> = EntityStore::new();
    let result: Result<Groomer, CoreError> = store.replace(groomer("x", "Xavier"));
    assert_eq!(
        result,
        Err(CoreError::NotFound {
            entity: EntityKind::Groomer,
            id: String::from("x"),
        })
    );
}

#[test]
fn test_remove_and_lookup() {
    let mut store: EntityStore<Groomer> = EntityStore::new();
    store.insert(groomer("a", "Ana"));
    assert!(store.contains(&GroomerId::new("a")));

    let removed: Groomer = store.remove(&GroomerId::new("a")).unwrap();
    assert_eq!(removed.name, "Ana");
    assert!(store.is_empty());
    assert!(store.get(&GroomerId::new("a")).is_none());
    assert!(store.remove(&GroomerId::new("a")).is_err());
}

#[test]
fn test_store_serializes_as_plain_array() {
    let mut store: EntityStore<Groomer> = EntityStore::new();
    store.insert(groomer("a", "Ana"));

    let json: String = serde_json::to_string(&store).unwrap();
    assert!(json.starts_with('['));
    assert!(json.contains("\"commissionRate\":10"));

    let back: EntityStore<Groomer> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, store);
}

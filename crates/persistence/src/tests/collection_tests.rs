// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CollectionRow, Persistence};

#[test]
fn test_missing_collection_loads_as_none() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.load_collection("petshop-clients").unwrap(), None);
}

#[test]
fn test_replace_then_load() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    persistence
        .replace_collections(&[("petshop-clients", "[]"), ("petshop-pets", "[{\"id\":\"p1\"}]")])
        .unwrap();

    assert_eq!(
        persistence.load_collection("petshop-clients").unwrap().as_deref(),
        Some("[]")
    );
    assert_eq!(
        persistence.load_collection("petshop-pets").unwrap().as_deref(),
        Some("[{\"id\":\"p1\"}]")
    );
}

#[test]
fn test_replace_overwrites_existing_row() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .replace_collections(&[("petshop-groomers", "[1]")])
        .unwrap();
    persistence
        .replace_collections(&[("petshop-groomers", "[2]")])
        .unwrap();

    let rows: Vec<CollectionRow> = persistence.list_collections().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "petshop-groomers");
    assert_eq!(rows[0].payload, "[2]");
    assert!(!rows[0].updated_at.is_empty());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    first.replace_collections(&[("petshop-packages", "[]")]).unwrap();

    assert!(second.load_collection("petshop-packages").unwrap().is_none());
}

#[test]
fn test_file_database_survives_reopen() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: std::path::PathBuf = dir.path().join("salon.db");

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .replace_collections(&[("petshop-appointments", "[]")])
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(
        reopened
            .load_collection("petshop-appointments")
            .unwrap()
            .as_deref(),
        Some("[]")
    );
}

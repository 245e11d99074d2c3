// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection slot reads.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::collections;
use crate::error::PersistenceError;

/// Diesel Queryable struct for collection rows.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = collections)]
pub struct CollectionRow {
    /// The slot name.
    pub name: String,
    /// The serialized collection.
    pub payload: String,
    /// RFC 3339 time of the last write.
    pub updated_at: String,
}

/// Retrieves the payload stored under a collection name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The collection slot name
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the slot was never written.
pub fn load_collection(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<String>, PersistenceError> {
    debug!(collection = name, "Loading collection");

    let payload: Option<String> = collections::table
        .filter(collections::name.eq(name))
        .select(collections::payload)
        .first::<String>(conn)
        .optional()?;

    Ok(payload)
}

/// Lists every stored slot, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_collections(conn: &mut SqliteConnection) -> Result<Vec<CollectionRow>, PersistenceError> {
    let rows: Vec<CollectionRow> = collections::table
        .order(collections::name.asc())
        .select(CollectionRow::as_select())
        .load(conn)?;
    Ok(rows)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection slot writes.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::diesel_schema::collections;
use crate::error::PersistenceError;

/// Diesel Insertable struct for collection rows.
#[derive(Debug, Insertable)]
#[diesel(table_name = collections)]
struct NewCollectionRow<'a> {
    name: &'a str,
    payload: &'a str,
    updated_at: &'a str,
}

/// Replaces several collection slots in one transaction.
///
/// Either every slot is written or none is.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `slots` - `(name, payload)` pairs to write
///
/// # Errors
///
/// Returns an error if any write fails. The transaction is rolled back.
pub fn replace_collections(
    conn: &mut SqliteConnection,
    slots: &[(&str, &str)],
) -> Result<(), PersistenceError> {
    let updated_at: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        for &(name, payload) in slots {
            diesel::replace_into(collections::table)
                .values(&NewCollectionRow {
                    name,
                    payload,
                    updated_at: &updated_at,
                })
                .execute(conn)?;
            debug!(collection = name, bytes = payload.len(), "Collection replaced");
        }
        Ok(())
    })
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::Client;
use crate::error::DomainError;

/// Validates that a client lists at least one pet.
///
/// Blank entries do not count as pet names.
///
/// # Arguments
///
/// * `client` - The client to validate
///
/// # Errors
///
/// Returns `DomainError::MissingPetNames` if no non-blank pet name is listed.
pub fn validate_client(client: &Client) -> Result<(), DomainError> {
    if client.pet_names.iter().all(|name| name.trim().is_empty()) {
        return Err(DomainError::MissingPetNames {
            tutor_name: client.tutor_name.clone(),
        });
    }
    Ok(())
}

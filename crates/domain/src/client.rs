// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::{Entity, EntityKind};
use crate::ids::ClientId;
use serde::{Deserialize, Serialize};

/// A pet tutor served by the salon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// The client identifier.
    pub id: ClientId,
    /// The tutor's name.
    pub tutor_name: String,
    /// Names of the tutor's pets. Never empty.
    pub pet_names: Vec<String>,
    /// Tax identifier (CPF). Required for invoicing, optional otherwise.
    #[serde(default)]
    pub tax_id: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
}

impl Client {
    /// Returns true if the client has a tax identifier on file.
    #[must_use]
    pub fn can_be_invoiced(&self) -> bool {
        self.tax_id.as_deref().is_some_and(|value| !value.trim().is_empty())
    }
}

impl Entity for Client {
    type Id = ClientId;
    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> &ClientId {
        &self.id
    }
}

/// Client fields supplied by a caller before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    /// The tutor's name.
    pub tutor_name: String,
    /// Names of the tutor's pets.
    pub pet_names: Vec<String>,
    /// Tax identifier (CPF).
    #[serde(default)]
    pub tax_id: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
}

impl NewClient {
    /// Attaches an identifier, producing a full client record.
    #[must_use]
    pub fn with_id(self, id: ClientId) -> Client {
        Client {
            id,
            tutor_name: self.tutor_name,
            pet_names: self.pet_names,
            tax_id: self.tax_id,
            phone: self.phone,
            email: self.email,
            address: self.address,
        }
    }
}

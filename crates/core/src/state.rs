// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StorageError;
use crate::ledger::{CommissionLedger, PointsLedger};
use crate::storage::{CollectionKey, CollectionWrite, Storage};
use crate::store::EntityStore;
use petgroom_domain::{Appointment, Client, Groomer, GroomerId, Package, Pet};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Every collection the salon keeps.
///
/// Operations stage changes on a clone of the state and the clone replaces
/// the original only after storage accepts the changed collections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    /// Clients, in insertion order.
    pub clients: EntityStore<Client>,
    /// Pets, in insertion order.
    pub pets: EntityStore<Pet>,
    /// The groomer roster. Order is the auto-assignment tie-break.
    pub groomers: EntityStore<Groomer>,
    /// Packages, in insertion order.
    pub packages: EntityStore<Package>,
    /// Appointments, in creation order.
    pub appointments: EntityStore<Appointment>,
    /// Commission ledger.
    pub commissions: CommissionLedger,
    /// Points ledger.
    pub points: PointsLedger,
}

impl State {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every collection from storage. Missing slots load as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot cannot be read or decoded.
    pub fn load<S: Storage>(storage: &mut S) -> Result<Self, StorageError> {
        Ok(Self {
            clients: decode(storage, CollectionKey::Clients)?,
            pets: decode(storage, CollectionKey::Pets)?,
            groomers: decode(storage, CollectionKey::Groomers)?,
            packages: decode(storage, CollectionKey::Packages)?,
            appointments: decode(storage, CollectionKey::Appointments)?,
            commissions: decode(storage, CollectionKey::Commissions)?,
            points: decode(storage, CollectionKey::Points)?,
        })
    }

    /// Serializes every collection that differs from `previous`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Encode` if a collection cannot be serialized.
    pub fn writes_since(&self, previous: &Self) -> Result<Vec<CollectionWrite>, StorageError> {
        let mut writes: Vec<CollectionWrite> = Vec::new();
        push_if_changed(&mut writes, CollectionKey::Clients, &self.clients, &previous.clients)?;
        push_if_changed(&mut writes, CollectionKey::Pets, &self.pets, &previous.pets)?;
        push_if_changed(
            &mut writes,
            CollectionKey::Groomers,
            &self.groomers,
            &previous.groomers,
        )?;
        push_if_changed(
            &mut writes,
            CollectionKey::Packages,
            &self.packages,
            &previous.packages,
        )?;
        push_if_changed(
            &mut writes,
            CollectionKey::Appointments,
            &self.appointments,
            &previous.appointments,
        )?;
        push_if_changed(
            &mut writes,
            CollectionKey::Commissions,
            &self.commissions,
            &previous.commissions,
        )?;
        push_if_changed(&mut writes, CollectionKey::Points, &self.points, &previous.points)?;
        Ok(writes)
    }

    /// Counts open appointments (waiting or progress) assigned to a groomer.
    #[must_use]
    pub fn workload(&self, groomer_id: &GroomerId) -> usize {
        self.appointments
            .iter()
            .filter(|appointment| appointment.is_open_work_for(groomer_id))
            .count()
    }
}

fn decode<S: Storage, T: DeserializeOwned + Default>(
    storage: &mut S,
    key: CollectionKey,
) -> Result<T, StorageError> {
    match storage.load(key)? {
        None => Ok(T::default()),
        Some(payload) if payload.trim().is_empty() => Ok(T::default()),
        Some(payload) => serde_json::from_str(&payload).map_err(|err| StorageError::Corrupt {
            key,
            message: err.to_string(),
        }),
    }
}

fn push_if_changed<T: Serialize + PartialEq>(
    writes: &mut Vec<CollectionWrite>,
    key: CollectionKey,
    current: &T,
    previous: &T,
) -> Result<(), StorageError> {
    if current == previous {
        return Ok(());
    }
    let payload: String = serde_json::to_string(current).map_err(|err| StorageError::Encode {
        key,
        message: err.to_string(),
    })?;
    writes.push(CollectionWrite { key, payload });
    Ok(())
}

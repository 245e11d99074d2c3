// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The salon facade: one entry point over every store, ledger and rule.

use crate::catalog;
use crate::clock::{Clock, SystemClock};
use crate::coordinator;
use crate::engine::{self, Assignment};
use crate::error::CoreError;
use crate::filter::AppointmentFilter;
use crate::state::State;
use crate::storage::{CollectionWrite, Storage};
use petgroom_domain::{
    Appointment, AppointmentId, Client, ClientId, Commission, EntityKind, Groomer, GroomerId,
    Money, NewAppointment, NewClient, NewGroomer, NewPackage, NewPet, Package, PackageId, Pet,
    PetId, PointsRecord, PriceTable, ServiceType, TransportType, VaccineStatus, YearMonth,
    resolve_price,
};
use time::Date;
use tracing::{debug, info, warn};

/// The salon engine bound to a storage backend and a clock.
///
/// Every mutating call runs against a staged copy of the state. The changed
/// collections are written to storage as one batch and the copy becomes the
/// live state only after that write succeeds. A rejected call changes
/// nothing, in memory or in storage.
#[derive(Debug)]
pub struct Salon<S: Storage, C: Clock = SystemClock> {
    state: State,
    storage: S,
    clock: C,
    prices: PriceTable,
}

impl<S: Storage, C: Clock> Salon<S, C> {
    /// Loads every collection from `storage`.
    ///
    /// # Arguments
    ///
    /// * `storage` - The durable backend
    /// * `clock` - Source of today's date
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if a collection cannot be read or decoded.
    pub fn open(mut storage: S, clock: C) -> Result<Self, CoreError> {
        let state: State = State::load(&mut storage)?;
        info!(
            clients = state.clients.len(),
            pets = state.pets.len(),
            groomers = state.groomers.len(),
            packages = state.packages.len(),
            appointments = state.appointments.len(),
            "Salon state loaded"
        );
        Ok(Self {
            state,
            storage,
            clock,
            prices: PriceTable::default(),
        })
    }

    /// Replaces the fixed service prices used by `quote`.
    #[must_use]
    pub const fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    /// Returns the committed state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Returns the storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the fixed service prices.
    #[must_use]
    pub const fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Returns today's date according to the salon clock.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    fn transact<T>(
        &mut self,
        operation: &'static str,
        apply: impl FnOnce(&mut State, Date) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let today: Date = self.clock.today();
        let mut staged: State = self.state.clone();

        let result: Result<(T, usize), CoreError> =
            apply(&mut staged, today).and_then(|value| {
                let writes: Vec<CollectionWrite> = staged.writes_since(&self.state)?;
                if !writes.is_empty() {
                    self.storage.replace(&writes)?;
                }
                Ok((value, writes.len()))
            });

        match result {
            Ok((value, collections)) => {
                self.state = staged;
                debug!(operation, collections, "Salon operation committed");
                Ok(value)
            }
            Err(err) => {
                warn!(operation, error = %err, "Salon operation rejected");
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Clients
    // ------------------------------------------------------------------

    /// Lists clients in insertion order.
    #[must_use]
    pub fn list_clients(&self) -> &[Client] {
        self.state.clients.list()
    }

    /// Returns a client by id.
    #[must_use]
    pub fn get_client(&self, client_id: &ClientId) -> Option<&Client> {
        self.state.clients.get(client_id)
    }

    /// Adds a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client lists no pet names or storage fails.
    pub fn add_client(&mut self, new: NewClient) -> Result<Client, CoreError> {
        self.transact("add_client", |state, _| catalog::add_client(state, new))
    }

    /// Replaces a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client does not exist, lists no pet names,
    /// or storage fails.
    pub fn update_client(&mut self, client: Client) -> Result<Client, CoreError> {
        self.transact("update_client", |state, _| {
            catalog::update_client(state, client)
        })
    }

    /// Deletes a client that no pet or appointment refers to.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ReferentialConflict` if the client is still
    /// referenced, `CoreError::NotFound` if it does not exist, or a storage
    /// error.
    pub fn delete_client(&mut self, client_id: &ClientId) -> Result<Client, CoreError> {
        self.transact("delete_client", |state, _| {
            coordinator::delete_client(state, client_id)
        })
    }

    /// Lists a client's pets.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the client does not exist.
    pub fn pets_for_client(&self, client_id: &ClientId) -> Result<Vec<&Pet>, CoreError> {
        self.state.clients.require(client_id)?;
        Ok(catalog::pets_for_client(&self.state, client_id))
    }

    // ------------------------------------------------------------------
    // Pets
    // ------------------------------------------------------------------

    /// Lists pets in insertion order.
    #[must_use]
    pub fn list_pets(&self) -> &[Pet] {
        self.state.pets.list()
    }

    /// Returns a pet by id.
    #[must_use]
    pub fn get_pet(&self, pet_id: &PetId) -> Option<&Pet> {
        self.state.pets.get(pet_id)
    }

    /// Adds a pet.
    ///
    /// # Errors
    ///
    /// Returns an error if the owning client does not exist or storage fails.
    pub fn add_pet(&mut self, new: NewPet) -> Result<Pet, CoreError> {
        self.transact("add_pet", |state, _| catalog::add_pet(state, new))
    }

    /// Replaces a pet.
    ///
    /// # Errors
    ///
    /// Returns an error if the pet or its client does not exist or storage
    /// fails.
    pub fn update_pet(&mut self, pet: Pet) -> Result<Pet, CoreError> {
        self.transact("update_pet", |state, _| catalog::update_pet(state, pet))
    }

    /// Deletes a pet whose name no appointment carries.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ReferentialConflict` if an appointment carries
    /// the pet's name, `CoreError::NotFound` if it does not exist, or a
    /// storage error.
    pub fn delete_pet(&mut self, pet_id: &PetId) -> Result<Pet, CoreError> {
        self.transact("delete_pet", |state, _| coordinator::delete_pet(state, pet_id))
    }

    /// Returns a pet's rabies-vaccine status as of today.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the pet does not exist.
    pub fn vaccine_status(&self, pet_id: &PetId) -> Result<VaccineStatus, CoreError> {
        let pet: &Pet = self.state.pets.require(pet_id)?;
        Ok(pet.vaccine_status(self.clock.today()))
    }

    // ------------------------------------------------------------------
    // Groomers
    // ------------------------------------------------------------------

    /// Lists the roster in order.
    #[must_use]
    pub fn list_groomers(&self) -> &[Groomer] {
        self.state.groomers.list()
    }

    /// Returns a groomer by id.
    #[must_use]
    pub fn get_groomer(&self, groomer_id: &GroomerId) -> Option<&Groomer> {
        self.state.groomers.get(groomer_id)
    }

    /// Adds a groomer to the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn add_groomer(&mut self, new: NewGroomer) -> Result<Groomer, CoreError> {
        self.transact("add_groomer", |state, _| Ok(catalog::add_groomer(state, new)))
    }

    /// Replaces a groomer.
    ///
    /// # Errors
    ///
    /// Returns an error if the groomer does not exist or storage fails.
    pub fn update_groomer(&mut self, groomer: Groomer) -> Result<Groomer, CoreError> {
        self.transact("update_groomer", |state, _| {
            catalog::update_groomer(state, groomer)
        })
    }

    /// Deletes a groomer no appointment refers to.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ReferentialConflict` if an appointment refers to
    /// the groomer, `CoreError::NotFound` if it does not exist, or a
    /// storage error.
    pub fn delete_groomer(&mut self, groomer_id: &GroomerId) -> Result<Groomer, CoreError> {
        self.transact("delete_groomer", |state, _| {
            coordinator::delete_groomer(state, groomer_id)
        })
    }

    /// Counts a groomer's open appointments.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the groomer does not exist.
    pub fn groomer_workload(&self, groomer_id: &GroomerId) -> Result<usize, CoreError> {
        self.state.groomers.require(groomer_id)?;
        Ok(self.state.workload(groomer_id))
    }

    // ------------------------------------------------------------------
    // Packages
    // ------------------------------------------------------------------

    /// Lists packages in insertion order.
    #[must_use]
    pub fn list_packages(&self) -> &[Package] {
        self.state.packages.list()
    }

    /// Returns a package by id.
    #[must_use]
    pub fn get_package(&self, package_id: &PackageId) -> Option<&Package> {
        self.state.packages.get(package_id)
    }

    /// Adds a package.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn add_package(&mut self, new: NewPackage) -> Result<Package, CoreError> {
        self.transact("add_package", |state, _| Ok(catalog::add_package(state, new)))
    }

    /// Replaces a package.
    ///
    /// # Errors
    ///
    /// Returns an error if the package does not exist or storage fails.
    pub fn update_package(&mut self, package: Package) -> Result<Package, CoreError> {
        self.transact("update_package", |state, _| {
            catalog::update_package(state, package)
        })
    }

    /// Deletes a package no appointment refers to.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ReferentialConflict` if an appointment uses the
    /// package, `CoreError::NotFound` if it does not exist, or a storage
    /// error.
    pub fn delete_package(&mut self, package_id: &PackageId) -> Result<Package, CoreError> {
        self.transact("delete_package", |state, _| {
            coordinator::delete_package(state, package_id)
        })
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    /// Lists appointments in creation order.
    #[must_use]
    pub fn list_appointments(&self) -> &[Appointment] {
        self.state.appointments.list()
    }

    /// Returns an appointment by id.
    #[must_use]
    pub fn get_appointment(&self, appointment_id: &AppointmentId) -> Option<&Appointment> {
        self.state.appointments.get(appointment_id)
    }

    /// Lists the appointments matching `filter`, in creation order.
    #[must_use]
    pub fn filter_appointments(&self, filter: &AppointmentFilter) -> Vec<&Appointment> {
        self.state
            .appointments
            .iter()
            .filter(|appointment| filter.matches(appointment))
            .collect()
    }

    /// Books an appointment.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced record does not exist or storage
    /// fails.
    pub fn create_appointment(&mut self, new: NewAppointment) -> Result<Appointment, CoreError> {
        self.transact("create_appointment", |state, today| {
            engine::create_appointment(state, new, today)
        })
    }

    /// Stores a new version of an appointment, posting any derived
    /// commission or points.
    ///
    /// # Errors
    ///
    /// Returns an error if the appointment or a referenced record does not
    /// exist, the status change is not permitted, or storage fails.
    pub fn update_appointment(
        &mut self,
        appointment: Appointment,
    ) -> Result<Appointment, CoreError> {
        self.transact("update_appointment", |state, today| {
            engine::update_appointment(state, appointment, today)
        })
    }

    /// Deletes an appointment and its ledger rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the appointment does not exist or storage fails.
    pub fn delete_appointment(
        &mut self,
        appointment_id: &AppointmentId,
    ) -> Result<Appointment, CoreError> {
        self.transact("delete_appointment", |state, _| {
            engine::delete_appointment(state, appointment_id)
        })
    }

    /// Assigns the least-loaded available groomer to an appointment.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoGroomerAvailable` if no groomer is available,
    /// `CoreError::NotFound` if the appointment does not exist, or a
    /// storage error.
    pub fn auto_assign(&mut self, appointment_id: &AppointmentId) -> Result<Assignment, CoreError> {
        self.transact("auto_assign", |state, today| {
            engine::auto_assign(state, appointment_id, today)
        })
    }

    /// Auto-assigns every open, unassigned appointment on `date`.
    ///
    /// Either every such appointment is assigned or none is.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoGroomerAvailable` if there is work but no
    /// available groomer, or a storage error.
    pub fn auto_assign_unassigned(&mut self, date: Date) -> Result<Vec<Assignment>, CoreError> {
        self.transact("auto_assign_unassigned", |state, today| {
            engine::auto_assign_unassigned(state, date, today)
        })
    }

    /// Assigns a specific groomer, starting a waiting appointment.
    ///
    /// # Errors
    ///
    /// Returns an error if the appointment or groomer does not exist or
    /// storage fails.
    pub fn assign_groomer(
        &mut self,
        appointment_id: &AppointmentId,
        groomer_id: &GroomerId,
    ) -> Result<Appointment, CoreError> {
        self.transact("assign_groomer", |state, today| {
            engine::assign_groomer(state, appointment_id, groomer_id, today)
        })
    }

    /// Resolves the price of a prospective appointment.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownReference` if `package_id` names a
    /// package that does not exist.
    pub fn quote(
        &self,
        service_type: ServiceType,
        package_id: Option<&PackageId>,
        transport: TransportType,
    ) -> Result<Money, CoreError> {
        let package: Option<&Package> = match package_id {
            Some(package_id) => Some(self.state.packages.get(package_id).ok_or_else(|| {
                CoreError::UnknownReference {
                    entity: EntityKind::Package,
                    id: package_id.to_string(),
                }
            })?),
            None => None,
        };
        Ok(resolve_price(&self.prices, service_type, package, transport))
    }

    // ------------------------------------------------------------------
    // Ledgers
    // ------------------------------------------------------------------

    /// Lists a groomer's commissions, optionally for one month.
    #[must_use]
    pub fn commissions_for_groomer(
        &self,
        groomer_id: &GroomerId,
        period: Option<YearMonth>,
    ) -> Vec<&Commission> {
        self.state.commissions.for_groomer(groomer_id, period)
    }

    /// Sums a groomer's commissions, optionally for one month.
    #[must_use]
    pub fn commission_total(&self, groomer_id: &GroomerId, period: Option<YearMonth>) -> Money {
        self.state.commissions.total_for_groomer(groomer_id, period)
    }

    /// Lists every commission posted in a month.
    #[must_use]
    pub fn commissions_in_month(&self, period: YearMonth) -> Vec<&Commission> {
        self.state.commissions.in_month(period)
    }

    /// Lists a groomer's points records, optionally for one month.
    #[must_use]
    pub fn points_for_groomer(
        &self,
        groomer_id: &GroomerId,
        period: Option<YearMonth>,
    ) -> Vec<&PointsRecord> {
        self.state.points.for_groomer(groomer_id, period)
    }

    /// Sums a groomer's points, optionally for one month.
    #[must_use]
    pub fn groomer_points(&self, groomer_id: &GroomerId, period: Option<YearMonth>) -> u32 {
        self.state.points.total_for_groomer(groomer_id, period)
    }

    /// Lists every points record made in a month.
    #[must_use]
    pub fn points_in_month(&self, period: YearMonth) -> Vec<&PointsRecord> {
        self.state.points.in_month(period)
    }
}

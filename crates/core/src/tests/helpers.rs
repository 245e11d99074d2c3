// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CollectionKey, CollectionWrite, FixedClock, MemoryStorage, Salon, Storage, StorageError};
use petgroom_domain::{
    Appointment, Client, CommissionRate, Groomer, GroomerStatus, Money, NewAppointment,
    NewClient, NewGroomer, NewPackage, NewPet, Package, Pet, RabiesVaccine, ServiceType,
    TransportType,
};
use std::cell::Cell;
use std::rc::Rc;
use time::Date;
use time::macros::{date, time};

pub const TODAY: Date = date!(2026 - 10 - 19);

pub type TestSalon = Salon<MemoryStorage, FixedClock>;

pub fn create_test_salon() -> TestSalon {
    Salon::open(MemoryStorage::new(), FixedClock(TODAY)).unwrap()
}

pub fn create_test_client(salon: &mut TestSalon, tutor_name: &str, pet_name: &str) -> Client {
    salon
        .add_client(NewClient {
            tutor_name: String::from(tutor_name),
            pet_names: vec![String::from(pet_name)],
            tax_id: None,
            phone: String::from("555-0100"),
            email: String::new(),
            address: String::new(),
        })
        .unwrap()
}

pub fn create_test_pet(salon: &mut TestSalon, client: &Client, name: &str) -> Pet {
    salon
        .add_pet(NewPet {
            client_id: client.id.clone(),
            name: String::from(name),
            food_type: String::from("dry"),
            last_tick_medicine: None,
            rabies_vaccine: RabiesVaccine::default(),
            vaccine_history: Vec::new(),
        })
        .unwrap()
}

pub fn create_test_groomer(salon: &mut TestSalon, name: &str, rate: u8) -> Groomer {
    salon
        .add_groomer(NewGroomer {
            name: String::from(name),
            status: GroomerStatus::Available,
            commission_rate: CommissionRate::new(rate).unwrap(),
        })
        .unwrap()
}

pub fn create_test_package(salon: &mut TestSalon) -> Package {
    salon
        .add_package(NewPackage {
            name: String::from("Monthly care"),
            description: String::new(),
            includes_baths: 4,
            includes_grooming: true,
            includes_hydration: true,
            base_price: Money::from_units(200),
            pickup_price: Money::from_units(240),
        })
        .unwrap()
}

pub fn new_test_appointment(client: &Client, date: Date) -> NewAppointment {
    NewAppointment {
        client_id: client.id.clone(),
        pet_name: client.pet_names[0].clone(),
        date,
        time: time!(10:00),
        service_type: ServiceType::Both,
        groomer_id: None,
        status: None,
        package_id: None,
        transport_type: TransportType::Client,
        price: Money::from_units(60),
        points: None,
    }
}

pub fn create_test_appointment(salon: &mut TestSalon, client: &Client) -> Appointment {
    salon
        .create_appointment(new_test_appointment(client, TODAY))
        .unwrap()
}

/// Storage that accepts reads and can be told to reject writes.
#[derive(Debug, Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub fail_writes: Rc<Cell<bool>>,
    pub write_batches: Vec<Vec<CollectionKey>>,
}

impl Storage for FlakyStorage {
    fn load(&mut self, key: CollectionKey) -> Result<Option<String>, StorageError> {
        self.inner.load(key)
    }

    fn replace(&mut self, writes: &[CollectionWrite]) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write(String::from("disk full")));
        }
        self.write_batches
            .push(writes.iter().map(|write| write.key).collect());
        self.inner.replace(writes)
    }
}

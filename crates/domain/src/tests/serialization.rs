// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Appointment, AppointmentId, AppointmentStatus, ClientId, GroomerId, Money, NewAppointment,
    PackageId, Points, ServiceType, TransportType,
};
use serde_json::{Value, json};
use time::macros::{date, time};

#[test]
fn test_new_appointment_defaults() {
    let input: Value = json!({
        "clientId": "c1",
        "petName": "Rex",
        "date": "2026-10-19",
        "time": "09:30",
        "serviceType": "bath",
        "price": 3000
    });
    let new: NewAppointment = serde_json::from_value(input).unwrap();
    let appointment: Appointment = new.with_id(AppointmentId::new("a1"));

    assert_eq!(appointment.status, AppointmentStatus::Waiting);
    assert_eq!(appointment.groomer_id, None);
    assert_eq!(appointment.transport_type, TransportType::Client);
    assert_eq!(appointment.points, None);
    assert_eq!(appointment.date, date!(2026 - 10 - 19));
    assert_eq!(appointment.time, time!(09:30));
}

#[test]
fn test_package_forces_package_service_type() {
    let new: NewAppointment = NewAppointment {
        client_id: ClientId::new("c1"),
        pet_name: String::from("Rex"),
        date: date!(2026 - 10 - 19),
        time: time!(10:00),
        service_type: ServiceType::Bath,
        groomer_id: None,
        status: None,
        package_id: Some(PackageId::new("p1")),
        transport_type: TransportType::Pickup,
        price: Money::from_units(220),
        points: None,
    };
    assert_eq!(
        new.with_id(AppointmentId::new("a1")).service_type,
        ServiceType::Package
    );
}

#[test]
fn test_appointment_wire_shape() {
    let appointment: Appointment = Appointment {
        id: AppointmentId::new("a1"),
        client_id: ClientId::new("c1"),
        pet_name: String::from("Rex"),
        date: date!(2026 - 10 - 19),
        time: time!(14:05),
        service_type: ServiceType::Both,
        groomer_id: Some(GroomerId::new("g1")),
        status: AppointmentStatus::Progress,
        package_id: None,
        transport_type: TransportType::Client,
        price: Money::from_units(60),
        points: Some(Points::new(2).unwrap()),
    };

    let value: Value = serde_json::to_value(&appointment).unwrap();
    assert_eq!(value["clientId"], "c1");
    assert_eq!(value["date"], "2026-10-19");
    assert_eq!(value["time"], "14:05");
    assert_eq!(value["serviceType"], "both");
    assert_eq!(value["groomerId"], "g1");
    assert_eq!(value["status"], "progress");
    assert_eq!(value["price"], 6000);
    assert_eq!(value["points"], 2);

    let back: Appointment = serde_json::from_value(value).unwrap();
    assert_eq!(back, appointment);
}

#[test]
fn test_out_of_range_points_are_rejected_on_read() {
    let input: Value = json!({
        "clientId": "c1",
        "petName": "Rex",
        "date": "2026-10-19",
        "time": "09:30",
        "serviceType": "bath",
        "price": 3000,
        "points": 5
    });
    assert!(serde_json::from_value::<NewAppointment>(input).is_err());
}

#[test]
fn test_empty_vaccine_date_reads_as_none() {
    let input: Value = json!({ "isUpToDate": false, "lastDate": "" });
    let vaccine: crate::RabiesVaccine = serde_json::from_value(input).unwrap();
    assert_eq!(vaccine.last_date, None);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CommissionLedger, PointsLedger};
use petgroom_domain::{AppointmentId, GroomerId, Money, Points, YearMonth};
use time::Month;
use time::macros::date;

#[test]
fn test_commissions_filter_by_groomer_and_month() {
    let mut ledger: CommissionLedger = CommissionLedger::new();
    let ana: GroomerId = GroomerId::new("ana");
    let bia: GroomerId = GroomerId::new("bia");

    ledger.post(ana.clone(), AppointmentId::new("a1"), Money::from_units(12), date!(2026 - 09 - 30));
    ledger.post(ana.clone(), AppointmentId::new("a2"), Money::from_units(8), date!(2026 - 10 - 01));
    ledger.post(bia.clone(), AppointmentId::new("a3"), Money::from_units(5), date!(2026 - 10 - 02));

    let october: YearMonth = YearMonth::new(2026, Month::October);
    assert_eq!(ledger.for_groomer(&ana, None).len(), 2);
    assert_eq!(ledger.for_groomer(&ana, Some(october)).len(), 1);
    assert_eq!(ledger.total_for_groomer(&ana, None), Money::from_units(20));
    assert_eq!(ledger.total_for_groomer(&ana, Some(october)), Money::from_units(8));
    assert_eq!(ledger.in_month(october).len(), 2);
    assert_eq!(
        ledger.total_for_groomer(&bia, Some(YearMonth::new(2025, Month::October))),
        Money::ZERO
    );
}

#[test]
fn test_commission_removal_by_appointment() {
    let mut ledger: CommissionLedger = CommissionLedger::new();
    ledger.post(GroomerId::new("ana"), AppointmentId::new("a1"), Money::from_units(12), date!(2026 - 10 - 01));
    ledger.post(GroomerId::new("ana"), AppointmentId::new("a2"), Money::from_units(8), date!(2026 - 10 - 01));

    assert_eq!(ledger.remove_for_appointment(&AppointmentId::new("a1")), 1);
    assert!(ledger.for_appointment(&AppointmentId::new("a1")).is_none());
    assert_eq!(ledger.list().len(), 1);
    assert_eq!(ledger.remove_for_appointment(&AppointmentId::new("a1")), 0);
}

#[test]
fn test_points_upsert_replaces_in_place() {
    let mut ledger: PointsLedger = PointsLedger::new();
    let appointment: AppointmentId = AppointmentId::new("a1");

    let first = ledger.upsert(
        GroomerId::new("ana"),
        appointment.clone(),
        Points::new(1).unwrap(),
        date!(2026 - 10 - 01),
    );
    let second = ledger.upsert(
        GroomerId::new("bia"),
        appointment.clone(),
        Points::new(3).unwrap(),
        date!(2026 - 10 - 05),
    );

    assert_eq!(ledger.list().len(), 1);
    assert_eq!(first.id, second.id);
    assert_eq!(second.points.value(), 3);
    assert_eq!(second.groomer_id, GroomerId::new("bia"));
    assert_eq!(second.date, date!(2026 - 10 - 01));
    assert_eq!(ledger.total_for_groomer(&GroomerId::new("ana"), None), 0);
    assert_eq!(ledger.total_for_groomer(&GroomerId::new("bia"), None), 3);
}

#[test]
fn test_monthly_points_total() {
    let mut ledger: PointsLedger = PointsLedger::new();
    let ana: GroomerId = GroomerId::new("ana");
    ledger.upsert(ana.clone(), AppointmentId::new("a1"), Points::new(2).unwrap(), date!(2026 - 10 - 01));
    ledger.upsert(ana.clone(), AppointmentId::new("a2"), Points::new(3).unwrap(), date!(2026 - 10 - 20));
    ledger.upsert(ana.clone(), AppointmentId::new("a3"), Points::new(1).unwrap(), date!(2026 - 11 - 01));

    let october: YearMonth = YearMonth::new(2026, Month::October);
    assert_eq!(ledger.total_for_groomer(&ana, Some(october)), 5);
    assert_eq!(ledger.total_for_groomer(&ana, None), 6);
    assert_eq!(ledger.in_month(october).len(), 2);
    assert_eq!(ledger.for_groomer(&ana, Some(october)).len(), 2);

    assert_eq!(ledger.remove_for_appointment(&AppointmentId::new("a2")), 1);
    assert_eq!(ledger.total_for_groomer(&ana, Some(october)), 2);
}

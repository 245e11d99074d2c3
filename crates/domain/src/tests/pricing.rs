// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Money, NewPackage, Package, PackageId, PriceTable, ServiceType, TransportType, resolve_price,
};

fn create_test_package() -> Package {
    NewPackage {
        name: String::from("Monthly"),
        description: String::from("Four baths and one grooming"),
        includes_baths: 4,
        includes_grooming: true,
        includes_hydration: false,
        base_price: Money::from_units(180),
        pickup_price: Money::from_units(220),
    }
    .with_id(PackageId::new("pkg-1"))
}

#[test]
fn test_default_table_prices() {
    let table: PriceTable = PriceTable::default();
    assert_eq!(table.service_price(ServiceType::Bath), Money::from_units(30));
    assert_eq!(
        table.service_price(ServiceType::Grooming),
        Money::from_units(40)
    );
    assert_eq!(table.service_price(ServiceType::Both), Money::from_units(60));
    assert_eq!(table.service_price(ServiceType::Package), Money::ZERO);
}

#[test]
fn test_package_price_follows_transport() {
    let table: PriceTable = PriceTable::default();
    let package: Package = create_test_package();

    assert_eq!(
        resolve_price(&table, ServiceType::Package, Some(&package), TransportType::Client),
        Money::from_units(180)
    );
    assert_eq!(
        resolve_price(&table, ServiceType::Package, Some(&package), TransportType::Pickup),
        Money::from_units(220)
    );
}

#[test]
fn test_package_wins_over_service_type() {
    let table: PriceTable = PriceTable::default();
    let package: Package = create_test_package();
    assert_eq!(
        resolve_price(&table, ServiceType::Bath, Some(&package), TransportType::Client),
        Money::from_units(180)
    );
}

#[test]
fn test_package_service_without_package_is_free() {
    let table: PriceTable = PriceTable::default();
    assert_eq!(
        resolve_price(&table, ServiceType::Package, None, TransportType::Pickup),
        Money::ZERO
    );
}

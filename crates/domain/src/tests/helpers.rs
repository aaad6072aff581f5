// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ProposedShipmentDefinition, Shipment, ShipmentItem, StoreConfig,
};

pub fn create_test_item(order_item_id: &str, quantity: u32) -> ShipmentItem {
    ShipmentItem::new(order_item_id, "T-shirt (Red, Large)", quantity).unwrap()
}

pub fn create_test_definition() -> ProposedShipmentDefinition {
    ProposedShipmentDefinition {
        order_id: 10,
        shipping_profile_id: 7,
        items: vec![create_test_item("order-item-1", 2)],
        package_type_id: None,
        custom_fields: std::collections::HashMap::new(),
    }
}

pub fn create_test_store() -> StoreConfig {
    StoreConfig::new(
        String::from("US"),
        vec![String::from("US"), String::from("CA")],
    )
}

pub fn create_persisted_shipment(shipment_id: i64, profile_id: Option<i64>) -> Shipment {
    let mut shipment: Shipment = Shipment::with_id(shipment_id, 10, String::from("Shipment #1"));
    shipment.shipping_profile_id = profile_id;
    shipment.items = vec![create_test_item("order-item-1", 1)];
    shipment
}

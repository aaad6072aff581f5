// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CheckoutSubmission, CommitPhase, Packer, ShipmentFormHandler, ShipmentSubmission, Storage,
    StorageError, WorkflowState,
};
use shipflow_domain::{
    Order, ProposedShipment, ProposedShipmentDefinition, Shipment, ShipmentItem, ShippingProfile,
    StoreConfig,
};
use std::cell::RefCell;
use std::collections::HashMap;

pub fn create_test_item(order_item_id: &str, quantity: u32) -> ShipmentItem {
    ShipmentItem::new(order_item_id, "T-shirt (Red, Large)", quantity).unwrap()
}

pub fn create_test_store() -> StoreConfig {
    StoreConfig::new(
        String::from("US"),
        vec![String::from("US"), String::from("CA")],
    )
}

pub fn create_test_order(shipments: Vec<Shipment>) -> Order {
    let mut order: Order = Order::new(10, 42, create_test_store());
    order.shipments = shipments;
    order
}

pub fn create_persisted_shipment(shipment_id: i64, profile_id: Option<i64>) -> Shipment {
    let mut shipment: Shipment =
        Shipment::with_id(shipment_id, 10, format!("Shipment #{shipment_id}"));
    shipment.shipping_profile_id = profile_id;
    shipment.items = vec![create_test_item("order-item-1", 1)];
    shipment.shipping_method = Some(String::from("flat_rate"));
    shipment
}

pub fn method_submission(method: &str) -> ShipmentSubmission {
    let mut values: ShipmentSubmission = HashMap::new();
    values.insert(
        String::from("shipping_method"),
        serde_json::Value::String(method.to_owned()),
    );
    values
}

/// Builds a full-step submission matching the currently rendered set, with
/// the given shipping method selected on every shipment.
pub fn submission_for(state: &WorkflowState, method: &str) -> CheckoutSubmission {
    CheckoutSubmission {
        shipping_profile: state.shipping_profile.clone(),
        shipments: state.render().iter().map(|_| method_submission(method)).collect(),
    }
}

/// A packer that always proposes a fixed number of single-item shipments.
pub struct StubPacker {
    pub shipment_count: usize,
    pub pack_calls: RefCell<usize>,
    pub last_profile_country: RefCell<Option<String>>,
}

impl StubPacker {
    pub fn new(shipment_count: usize) -> Self {
        Self {
            shipment_count,
            pack_calls: RefCell::new(0),
            last_profile_country: RefCell::new(None),
        }
    }
}

impl Packer for StubPacker {
    fn pack(
        &self,
        order: &Order,
        profile: &ShippingProfile,
        _existing: &[Shipment],
    ) -> Vec<ProposedShipment> {
        *self.pack_calls.borrow_mut() += 1;
        *self.last_profile_country.borrow_mut() = Some(profile.country_code.clone());
        (0..self.shipment_count)
            .map(|index| {
                ProposedShipment::new(ProposedShipmentDefinition {
                    order_id: order.order_id,
                    shipping_profile_id: profile.profile_id.unwrap_or(7),
                    items: vec![create_test_item(&format!("order-item-{}", index + 1), 1)],
                    ..Default::default()
                })
                .unwrap()
            })
            .collect()
    }
}

/// A form handler mapping the `shipping_method` and `shipping_service`
/// submission fields straight onto the entity, and requiring a method.
pub struct PassthroughFormHandler;

impl ShipmentFormHandler for PassthroughFormHandler {
    fn extract_values(&self, shipment: &mut Shipment, submission: &ShipmentSubmission) {
        if let Some(serde_json::Value::String(method)) = submission.get("shipping_method") {
            shipment.shipping_method = Some(method.clone());
        }
        if let Some(serde_json::Value::String(service)) = submission.get("shipping_service") {
            shipment.shipping_service = Some(service.clone());
        }
    }

    fn validate_values(
        &self,
        shipment: &Shipment,
        _submission: &ShipmentSubmission,
    ) -> Vec<(String, String)> {
        if shipment.shipping_method.is_none() {
            vec![(
                String::from("shipping_method"),
                String::from("A shipping method must be selected"),
            )]
        } else {
            Vec::new()
        }
    }
}

/// An in-memory storage backend recording every durable side effect.
pub struct InMemoryStorage {
    next_id: i64,
    pub profiles: HashMap<i64, ShippingProfile>,
    pub shipments: HashMap<i64, Shipment>,
    pub saved_orders: Vec<Order>,
    pub deleted: Vec<i64>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            next_id: 100,
            profiles: HashMap::new(),
            shipments: HashMap::new(),
            saved_orders: Vec::new(),
            deleted: Vec::new(),
        }
    }

    pub fn seed_profile(&mut self, profile: ShippingProfile) {
        if let Some(profile_id) = profile.profile_id {
            self.profiles.insert(profile_id, profile);
        }
    }

    pub fn seed_shipment(&mut self, shipment: Shipment) {
        if let Some(shipment_id) = shipment.shipment_id {
            self.shipments.insert(shipment_id, shipment);
        }
    }

    fn allocate(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStorage {
    fn load_profile(&self, profile_id: i64) -> Result<ShippingProfile, StorageError> {
        self.profiles
            .get(&profile_id)
            .cloned()
            .ok_or_else(|| StorageError::new("profile not found"))
    }

    fn load_shipments(&self, shipment_ids: &[i64]) -> Result<Vec<Shipment>, StorageError> {
        shipment_ids
            .iter()
            .map(|shipment_id| {
                self.shipments
                    .get(shipment_id)
                    .cloned()
                    .ok_or_else(|| StorageError::new("shipment not found"))
            })
            .collect()
    }

    fn save_profile(&mut self, profile: &mut ShippingProfile) -> Result<i64, StorageError> {
        let profile_id: i64 = profile.profile_id.unwrap_or_else(|| self.allocate());
        profile.profile_id = Some(profile_id);
        self.profiles.insert(profile_id, profile.clone());
        Ok(profile_id)
    }

    fn save_shipment(&mut self, shipment: &mut Shipment) -> Result<i64, StorageError> {
        let shipment_id: i64 = shipment.shipment_id.unwrap_or_else(|| self.allocate());
        shipment.shipment_id = Some(shipment_id);
        self.shipments.insert(shipment_id, shipment.clone());
        Ok(shipment_id)
    }

    fn save_order(&mut self, order: &Order) -> Result<(), StorageError> {
        self.saved_orders.push(order.clone());
        Ok(())
    }

    fn delete_shipments(&mut self, shipments: &[Shipment]) -> Result<(), StorageError> {
        for shipment in shipments {
            if let Some(shipment_id) = shipment.shipment_id {
                self.shipments.remove(&shipment_id);
                self.deleted.push(shipment_id);
            }
        }
        Ok(())
    }
}

/// A storage backend that fails at one configured commit phase and
/// otherwise behaves like [`InMemoryStorage`].
pub struct FailingStorage {
    pub inner: InMemoryStorage,
    pub fail_phase: CommitPhase,
}

impl FailingStorage {
    pub fn new(inner: InMemoryStorage, fail_phase: CommitPhase) -> Self {
        Self { inner, fail_phase }
    }

    fn fail(&self) -> StorageError {
        StorageError::new("simulated backend failure")
    }
}

impl Storage for FailingStorage {
    fn load_profile(&self, profile_id: i64) -> Result<ShippingProfile, StorageError> {
        self.inner.load_profile(profile_id)
    }

    fn load_shipments(&self, shipment_ids: &[i64]) -> Result<Vec<Shipment>, StorageError> {
        if self.fail_phase == CommitPhase::DeleteShipments {
            return Err(self.fail());
        }
        self.inner.load_shipments(shipment_ids)
    }

    fn save_profile(&mut self, profile: &mut ShippingProfile) -> Result<i64, StorageError> {
        if self.fail_phase == CommitPhase::SaveProfile {
            return Err(self.fail());
        }
        self.inner.save_profile(profile)
    }

    fn save_shipment(&mut self, shipment: &mut Shipment) -> Result<i64, StorageError> {
        if self.fail_phase == CommitPhase::SaveShipment {
            return Err(self.fail());
        }
        self.inner.save_shipment(shipment)
    }

    fn save_order(&mut self, order: &Order) -> Result<(), StorageError> {
        if self.fail_phase == CommitPhase::SaveOrder {
            return Err(self.fail());
        }
        self.inner.save_order(order)
    }

    fn delete_shipments(&mut self, shipments: &[Shipment]) -> Result<(), StorageError> {
        if self.fail_phase == CommitPhase::DeleteShipments {
            return Err(self.fail());
        }
        self.inner.delete_shipments(shipments)
    }
}

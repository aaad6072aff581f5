// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AddressBook;
use shipflow_domain::{Order, Shipment, ShipmentItem, StoreConfig};
use std::cell::RefCell;
use std::rc::Rc;

pub fn create_shipment(shipment_id: i64, profile_id: Option<i64>) -> Shipment {
    let mut shipment: Shipment =
        Shipment::with_id(shipment_id, 10, format!("Shipment #{shipment_id}"));
    shipment.shipping_profile_id = profile_id;
    shipment.items = vec![ShipmentItem::new("order-item-1", "T-shirt", 1).unwrap()];
    shipment
}

pub fn create_test_order(shipments: Vec<Shipment>) -> Order {
    let store: StoreConfig = StoreConfig::new(String::from("US"), vec![String::from("US")]);
    let mut order: Order = Order::new(10, 42, store);
    order.shipments = shipments;
    order
}

/// An address book double recording every call made against it.
///
/// The call log is shared behind `Rc` so a clone handed to a dispatcher
/// stays inspectable from the test.
#[derive(Clone)]
pub struct RecordingAddressBook {
    /// The static `needs_copy` answer when `until_copied` is off.
    pub needs: bool,
    /// When set, `needs_copy` reports true only until the profile has
    /// been copied, like a real address book would.
    pub until_copied: bool,
    pub copies: Rc<RefCell<Vec<(i64, i64)>>>,
    pub needs_copy_calls: Rc<RefCell<usize>>,
}

impl RecordingAddressBook {
    pub fn new(needs: bool) -> Self {
        Self {
            needs,
            until_copied: false,
            copies: Rc::new(RefCell::new(Vec::new())),
            needs_copy_calls: Rc::new(RefCell::new(0)),
        }
    }

    pub fn until_copied() -> Self {
        Self {
            needs: true,
            until_copied: true,
            copies: Rc::new(RefCell::new(Vec::new())),
            needs_copy_calls: Rc::new(RefCell::new(0)),
        }
    }
}

impl AddressBook for RecordingAddressBook {
    fn needs_copy(&self, profile_id: i64) -> bool {
        *self.needs_copy_calls.borrow_mut() += 1;
        if self.until_copied {
            return !self
                .copies
                .borrow()
                .iter()
                .any(|(copied_profile, _)| *copied_profile == profile_id);
        }
        self.needs
    }

    fn copy(&mut self, profile_id: i64, customer_id: i64) {
        self.copies.borrow_mut().push((profile_id, customer_id));
    }
}

// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Copies an order's shipping information to the customer's address book.
//!
//! The synchronizer reacts to order lifecycle events delivered by the
//! hosting system's event dispatch. It owns no copy bookkeeping of its
//! own: whether a copy is still needed is entirely the address book
//! collaborator's call, which is what makes redelivered events harmless.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

#[cfg(test)]
mod tests;

use shipflow_domain::{Order, representative_profile};
use tracing::{debug, info};

/// The customer's durable address book.
///
/// The synchronizer never reads or writes an entry's internal shape; it
/// only asks whether a profile still needs copying and requests the copy.
pub trait AddressBook {
    /// Returns whether the given shipping profile still needs to be
    /// copied into an address book entry.
    fn needs_copy(&self, profile_id: i64) -> bool;

    /// Copies the given shipping profile into the customer's address book.
    fn copy(&mut self, profile_id: i64, customer_id: i64);
}

/// An order lifecycle event relevant to address book synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    /// The order transitioned to a placed status.
    Placed {
        /// The placed order.
        order: Order,
    },
    /// The order was reassigned to a different customer.
    Reassigned {
        /// The reassigned order.
        order: Order,
        /// The customer the order now belongs to.
        customer_id: i64,
    },
}

impl OrderEvent {
    /// Converts this event to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Placed { .. } => "order.placed",
            Self::Reassigned { .. } => "order.reassigned",
        }
    }
}

/// A subscriber to order lifecycle events.
pub trait OrderEventSubscriber {
    /// Handles one delivered event.
    fn handle(&mut self, event: &OrderEvent);
}

/// A process-wide dispatcher for order lifecycle events.
///
/// Subscribers register once, at setup time, and receive every dispatched
/// event in registration order.
#[derive(Default)]
pub struct EventDispatcher {
    subscribers: Vec<Box<dyn OrderEventSubscriber>>,
}

impl EventDispatcher {
    /// Creates a new dispatcher with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a subscriber.
    pub fn subscribe(&mut self, subscriber: Box<dyn OrderEventSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Delivers an event to every subscriber, in registration order.
    pub fn dispatch(&mut self, event: &OrderEvent) {
        debug!(event = event.as_str(), "dispatching order event");
        for subscriber in &mut self.subscribers {
            subscriber.handle(event);
        }
    }
}

/// Synchronizes an order's shipping profile into the customer's address
/// book on order lifecycle events.
pub struct AddressBookSync<A: AddressBook> {
    address_book: A,
}

impl<A: AddressBook> AddressBookSync<A> {
    /// Creates a new `AddressBookSync`.
    ///
    /// # Arguments
    ///
    /// * `address_book` - The address book collaborator
    #[must_use]
    pub const fn new(address_book: A) -> Self {
        Self { address_book }
    }

    /// Copies the order's shipping information when the order is placed.
    pub fn on_order_placed(&mut self, order: &Order) {
        self.sync(order, order.customer_id);
    }

    /// Copies the order's shipping information when the order is
    /// reassigned to a different customer.
    pub fn on_order_reassigned(&mut self, order: &Order, customer_id: i64) {
        self.sync(order, customer_id);
    }

    /// Resolves the order's representative shipping profile and copies it
    /// if the address book says a copy is still needed.
    ///
    /// Orders without shipping capability and orders whose first shipment
    /// carries no profile are defined no-ops, not errors.
    fn sync(&mut self, order: &Order, customer_id: i64) {
        if !order.shippable {
            debug!(order_id = order.order_id, "order is not shippable, skipping");
            return;
        }
        let Some(profile_id) = representative_profile(&order.shipments) else {
            debug!(order_id = order.order_id, "no shipping profile found, skipping");
            return;
        };
        if self.address_book.needs_copy(profile_id) {
            info!(
                order_id = order.order_id,
                profile_id, customer_id, "copying shipping profile to address book"
            );
            self.address_book.copy(profile_id, customer_id);
        }
    }
}

impl<A: AddressBook> OrderEventSubscriber for AddressBookSync<A> {
    fn handle(&mut self, event: &OrderEvent) {
        match event {
            OrderEvent::Placed { order } => self.on_order_placed(order),
            OrderEvent::Reassigned { order, customer_id } => {
                self.on_order_reassigned(order, *customer_id);
            }
        }
    }
}

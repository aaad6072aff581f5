// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Represents one line of a shipment.
///
/// Shipment items are immutable values. Each item references a purchasable
/// order item and carries the quantity packed into the owning shipment.
/// Validity is enforced at construction time, so a `ShipmentItem` held
/// anywhere in the system is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipmentItem {
    /// Reference to the purchased order item.
    order_item_id: String,
    /// Human-readable label, shown on the shipment summary.
    title: String,
    /// Quantity of the order item packed into this shipment.
    quantity: u32,
}

impl ShipmentItem {
    /// Creates a new `ShipmentItem`.
    ///
    /// # Arguments
    ///
    /// * `order_item_id` - Reference to the purchased order item
    /// * `title` - Human-readable label
    /// * `quantity` - Packed quantity (must be at least 1)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidShipmentItem` if the order item
    /// reference is empty or the quantity is zero.
    pub fn new(order_item_id: &str, title: &str, quantity: u32) -> Result<Self, DomainError> {
        if order_item_id.is_empty() {
            return Err(DomainError::InvalidShipmentItem(String::from(
                "Order item reference cannot be empty",
            )));
        }
        if quantity == 0 {
            return Err(DomainError::InvalidShipmentItem(String::from(
                "Quantity must be at least 1",
            )));
        }
        Ok(Self {
            order_item_id: order_item_id.to_owned(),
            title: title.to_owned(),
            quantity,
        })
    }

    /// Returns the purchased order item reference.
    #[must_use]
    pub fn order_item_id(&self) -> &str {
        &self.order_item_id
    }

    /// Returns the item title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the packed quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Store-level shipping configuration attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// The store's default country code (e.g., "US").
    pub default_country: String,
    /// The countries the store ships to.
    pub shipping_countries: Vec<String>,
}

impl StoreConfig {
    /// Creates a new `StoreConfig`.
    ///
    /// # Arguments
    ///
    /// * `default_country` - The store's default country code
    /// * `shipping_countries` - The countries the store ships to
    #[must_use]
    pub const fn new(default_country: String, shipping_countries: Vec<String>) -> Self {
        Self {
            default_country,
            shipping_countries,
        }
    }
}

/// A customer shipping profile.
///
/// A profile is the address a customer ships an order to. It is created
/// unsaved (no `profile_id`) and assigned its durable identifier by the
/// persistence layer on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingProfile {
    /// The durable identifier. `None` until persisted.
    pub profile_id: Option<i64>,
    /// The customer this profile belongs to.
    pub customer_id: i64,
    /// The destination country code.
    pub country_code: String,
    /// Free-form address line.
    pub address: Option<String>,
}

impl ShippingProfile {
    /// Creates a new unsaved `ShippingProfile` for a customer.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The owning customer
    /// * `country_code` - The destination country code
    #[must_use]
    pub const fn new(customer_id: i64, country_code: String) -> Self {
        Self {
            profile_id: None,
            customer_id,
            country_code,
            address: None,
        }
    }

    /// Creates a `ShippingProfile` with an existing durable identifier.
    ///
    /// # Arguments
    ///
    /// * `profile_id` - The durable identifier
    /// * `customer_id` - The owning customer
    /// * `country_code` - The destination country code
    /// * `address` - Optional free-form address line
    #[must_use]
    pub const fn with_id(
        profile_id: i64,
        customer_id: i64,
        country_code: String,
        address: Option<String>,
    ) -> Self {
        Self {
            profile_id: Some(profile_id),
            customer_id,
            country_code,
            address,
        }
    }
}

/// A persisted shipment entity attached to an order.
///
/// Shipments are mutable: the reconciliation step rewrites their packed
/// contents, while the buyer edits carrier and service selections through
/// the checkout form. `shipment_id` is `None` for shipments created during
/// reconciliation that have not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// The durable identifier. `None` until persisted.
    pub shipment_id: Option<i64>,
    /// The order this shipment belongs to.
    pub order_id: i64,
    /// The shipment title, shown as the sub-form heading.
    pub title: String,
    /// The shipping profile attached to this shipment.
    pub shipping_profile_id: Option<i64>,
    /// The packed items, in packing order.
    pub items: Vec<ShipmentItem>,
    /// The package type to ship in. `None` means the shipping method's
    /// default package type applies.
    pub package_type_id: Option<String>,
    /// The buyer-selected shipping method.
    pub shipping_method: Option<String>,
    /// The buyer-selected shipping service.
    pub shipping_service: Option<String>,
}

impl Shipment {
    /// Creates a new unsaved `Shipment` with default field values.
    ///
    /// # Arguments
    ///
    /// * `order_id` - The owning order
    /// * `title` - The shipment title
    #[must_use]
    pub const fn new(order_id: i64, title: String) -> Self {
        Self {
            shipment_id: None,
            order_id,
            title,
            shipping_profile_id: None,
            items: Vec::new(),
            package_type_id: None,
            shipping_method: None,
            shipping_service: None,
        }
    }

    /// Creates a `Shipment` with an existing durable identifier.
    ///
    /// # Arguments
    ///
    /// * `shipment_id` - The durable identifier
    /// * `order_id` - The owning order
    /// * `title` - The shipment title
    #[must_use]
    pub const fn with_id(shipment_id: i64, order_id: i64, title: String) -> Self {
        Self {
            shipment_id: Some(shipment_id),
            order_id,
            title,
            shipping_profile_id: None,
            items: Vec::new(),
            package_type_id: None,
            shipping_method: None,
            shipping_service: None,
        }
    }

    /// Adopts the packed contents of a proposed shipment.
    ///
    /// Identity, title and the buyer's carrier/service selections are
    /// preserved; items, package type and profile reference are replaced.
    pub fn populate_from_proposed(&mut self, proposed: &crate::proposed::ProposedShipment) {
        self.order_id = proposed.order_id();
        self.shipping_profile_id = Some(proposed.shipping_profile_id());
        self.items = proposed.items().to_vec();
        self.package_type_id = proposed.package_type_id().map(str::to_owned);
    }

    /// Attaches a persisted shipping profile to this shipment.
    pub const fn attach_profile(&mut self, profile_id: i64) {
        self.shipping_profile_id = Some(profile_id);
    }
}

/// An order, as seen by the shipping step.
///
/// The shipping step treats the order as the owner of its persisted
/// shipments; everything else about the order belongs to the surrounding
/// checkout framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// The durable order identifier.
    pub order_id: i64,
    /// The customer who placed the order.
    pub customer_id: i64,
    /// The store configuration governing this order.
    pub store: StoreConfig,
    /// The persisted shipments currently attached to the order.
    pub shipments: Vec<Shipment>,
    /// Whether this order can be shipped at all. Orders of digital-only
    /// carts have no shipping capability.
    pub shippable: bool,
}

impl Order {
    /// Creates a new shippable `Order` with no attached shipments.
    ///
    /// # Arguments
    ///
    /// * `order_id` - The durable order identifier
    /// * `customer_id` - The customer who placed the order
    /// * `store` - The store configuration
    #[must_use]
    pub const fn new(order_id: i64, customer_id: i64, store: StoreConfig) -> Self {
        Self {
            order_id,
            customer_id,
            store,
            shipments: Vec::new(),
            shippable: true,
        }
    }
}

// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::ShipmentItem;
use crate::validation::validate_shipment_items;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The construction input for a [`ProposedShipment`].
///
/// Packers fill in a definition and hand it to [`ProposedShipment::new`],
/// which enforces the required properties. Optional properties default
/// when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposedShipmentDefinition {
    /// The parent order. Required.
    pub order_id: i64,
    /// The shipping profile the shipment is destined for. Required.
    pub shipping_profile_id: i64,
    /// The packed items, in packing order. Required, non-empty.
    pub items: Vec<ShipmentItem>,
    /// The package type to ship in. `None` means the shipping method's
    /// default package type applies.
    pub package_type_id: Option<String>,
    /// Additional packer-specific fields, keyed by field name.
    pub custom_fields: HashMap<String, serde_json::Value>,
}

/// Represents a proposed shipment.
///
/// Proposed shipments are returned from the packing process, and then mapped
/// to new or existing shipment entities. This allows the packers to be run
/// whenever the order changes, while only modifying the shipments if they
/// have changed.
///
/// A proposed shipment is never persisted directly and has no identity
/// beyond structural equality; it is created fresh on every repack and
/// discarded once reconciliation has consumed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedShipment {
    /// The parent order.
    order_id: i64,
    /// The shipping profile the shipment is destined for.
    shipping_profile_id: i64,
    /// The packed items, in packing order.
    items: Vec<ShipmentItem>,
    /// The package type to ship in, if the packer selected one.
    package_type_id: Option<String>,
    /// Additional packer-specific fields, keyed by field name.
    custom_fields: HashMap<String, serde_json::Value>,
}

impl ProposedShipment {
    /// Creates a new `ProposedShipment` from a definition.
    ///
    /// # Arguments
    ///
    /// * `definition` - The definition
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingRequiredField` if `order_id` or
    /// `shipping_profile_id` is absent (non-positive), or if `items` is
    /// empty. Item well-formedness is enforced by [`ShipmentItem::new`],
    /// so a populated `items` list is always valid.
    pub fn new(definition: ProposedShipmentDefinition) -> Result<Self, DomainError> {
        if definition.order_id <= 0 {
            return Err(DomainError::MissingRequiredField("order_id"));
        }
        if definition.shipping_profile_id <= 0 {
            return Err(DomainError::MissingRequiredField("shipping_profile_id"));
        }
        validate_shipment_items(&definition.items)?;

        Ok(Self {
            order_id: definition.order_id,
            shipping_profile_id: definition.shipping_profile_id,
            items: definition.items,
            package_type_id: definition.package_type_id,
            custom_fields: definition.custom_fields,
        })
    }

    /// Returns the parent order ID.
    #[must_use]
    pub const fn order_id(&self) -> i64 {
        self.order_id
    }

    /// Returns the shipping profile ID.
    #[must_use]
    pub const fn shipping_profile_id(&self) -> i64 {
        self.shipping_profile_id
    }

    /// Returns the shipment items.
    #[must_use]
    pub fn items(&self) -> &[ShipmentItem] {
        &self.items
    }

    /// Returns the package type ID.
    ///
    /// If the proposed shipment returns no package type ID, shipping
    /// methods are expected to use their default package type.
    #[must_use]
    pub fn package_type_id(&self) -> Option<&str> {
        self.package_type_id.as_deref()
    }

    /// Returns the custom fields, in `field_name => value` format.
    #[must_use]
    pub const fn custom_fields(&self) -> &HashMap<String, serde_json::Value> {
        &self.custom_fields
    }
}

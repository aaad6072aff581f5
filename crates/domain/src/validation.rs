// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Order, ShipmentItem};

/// Validates that an order carries a usable durable reference.
///
/// The checkout workflow cannot operate on an order that has not been
/// assigned an identifier yet, since shipments must reference it.
///
/// # Arguments
///
/// * `order` - The order to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidOrder` if the order identifier is not
/// positive.
pub fn validate_order(order: &Order) -> Result<(), DomainError> {
    if order.order_id <= 0 {
        return Err(DomainError::InvalidOrder(String::from(
            "Order reference must be a positive identifier",
        )));
    }
    Ok(())
}

/// Validates a proposed shipment's item list.
///
/// # Arguments
///
/// * `items` - The items to validate
///
/// # Errors
///
/// Returns `DomainError::MissingRequiredField` if the list is empty.
pub fn validate_shipment_items(items: &[ShipmentItem]) -> Result<(), DomainError> {
    if items.is_empty() {
        return Err(DomainError::MissingRequiredField("items"));
    }
    Ok(())
}

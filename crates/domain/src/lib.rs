// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod profile;
mod proposed;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use profile::representative_profile;
pub use proposed::{ProposedShipment, ProposedShipmentDefinition};
pub use types::{Order, Shipment, ShipmentItem, ShippingProfile, StoreConfig};
pub use validation::{validate_order, validate_shipment_items};

// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator contracts the workflow engine depends on.
//!
//! The engine never resolves collaborators from ambient process state;
//! implementations are injected into [`crate::CheckoutWorkflow`] or passed
//! into the calls that need them.

use shipflow_domain::{Order, ProposedShipment, Shipment, ShippingProfile};
use std::collections::HashMap;
use thiserror::Error;

/// An error reported by a storage collaborator.
///
/// Storage backends are external to this crate; their failures cross the
/// boundary as an opaque message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage operation failed: {message}")]
pub struct StorageError {
    /// The backend's description of the failure.
    pub message: String,
}

impl StorageError {
    /// Creates a new `StorageError`.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// The packing process.
///
/// A packer bin-packs the order's items into candidate shipments. How items
/// are grouped and which package types are chosen is entirely the packer's
/// concern; the engine only consumes its output.
pub trait Packer {
    /// Packs the order's items into proposed shipments.
    ///
    /// # Arguments
    ///
    /// * `order` - The order being packed
    /// * `profile` - The shipping profile the buyer currently has selected
    /// * `existing` - The shipments previously known for the order
    fn pack(
        &self,
        order: &Order,
        profile: &ShippingProfile,
        existing: &[Shipment],
    ) -> Vec<ProposedShipment>;
}

/// Entity storage for orders, shipments and profiles.
///
/// All durable side effects of the workflow go through this trait, and only
/// at commit time. Implementations are expected to run one commit inside a
/// single transaction so a mid-commit failure rolls back completely.
pub trait Storage {
    /// Loads a shipping profile by its durable identifier.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the profile cannot be loaded.
    fn load_profile(&self, profile_id: i64) -> Result<ShippingProfile, StorageError>;

    /// Loads multiple shipments by their durable identifiers.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if any shipment cannot be loaded.
    fn load_shipments(&self, shipment_ids: &[i64]) -> Result<Vec<Shipment>, StorageError>;

    /// Saves a shipping profile, assigning a durable identifier on first
    /// save. Returns the profile's identifier.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the save fails.
    fn save_profile(&mut self, profile: &mut ShippingProfile) -> Result<i64, StorageError>;

    /// Saves a shipment, assigning a durable identifier on first save.
    /// Returns the shipment's identifier.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the save fails.
    fn save_shipment(&mut self, shipment: &mut Shipment) -> Result<i64, StorageError>;

    /// Saves an order.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the save fails.
    fn save_order(&mut self, order: &Order) -> Result<(), StorageError>;

    /// Deletes the given shipments.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the deletion fails.
    fn delete_shipments(&mut self, shipments: &[Shipment]) -> Result<(), StorageError>;
}

/// The submitted field values for one shipment sub-form, keyed by field
/// name. The workflow treats values as opaque; only the form handler
/// interprets them.
pub type ShipmentSubmission = HashMap<String, serde_json::Value>;

/// Per-shipment field extraction and validation.
///
/// This collaborator owns the mapping between a shipment sub-form and the
/// backing entity. Widget rendering is outside the engine; the handler only
/// sees submitted values.
pub trait ShipmentFormHandler {
    /// Writes the submitted values into the backing shipment entity.
    fn extract_values(&self, shipment: &mut Shipment, submission: &ShipmentSubmission);

    /// Validates the submitted values against the backing shipment entity.
    ///
    /// Returns one `(field, message)` pair per violation. An empty result
    /// means the sub-form is valid.
    fn validate_values(
        &self,
        shipment: &Shipment,
        submission: &ShipmentSubmission,
    ) -> Vec<(String, String)>;
}

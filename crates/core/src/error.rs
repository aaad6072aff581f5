// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::CheckoutStep;
use crate::traits::StorageError;
use shipflow_domain::DomainError;

/// The commit phase a persistence failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPhase {
    /// Saving the confirmed shipping profile.
    SaveProfile,
    /// Saving a surviving shipment.
    SaveShipment,
    /// Saving the order with its final shipment set.
    SaveOrder,
    /// Deleting the shipments removed by reconciliation.
    DeleteShipments,
}

impl CommitPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SaveProfile => "SaveProfile",
            Self::SaveShipment => "SaveShipment",
            Self::SaveOrder => "SaveOrder",
            Self::DeleteShipments => "DeleteShipments",
        }
    }
}

/// A persistence failure during commit.
///
/// Any failure mid-commit is treated as the entire commit failing; the
/// workflow never reports a partial commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitError {
    /// The phase the failure occurred in.
    pub phase: CommitPhase,
    /// The underlying storage failure.
    pub source: StorageError,
}

impl std::fmt::Display for CommitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Commit failed during {}: {}", self.phase.as_str(), self.source)
    }
}

impl std::error::Error for CommitError {}

/// One field-level validation failure.
///
/// Validation failures are collected and attached to their originating
/// field rather than thrown; the workflow returns to the edit step with
/// the submitted values retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// The shipment sub-form the failure belongs to, or `None` for the
    /// profile sub-step.
    pub shipment_index: Option<usize>,
    /// The field name.
    pub field: String,
    /// The user-facing message.
    pub message: String,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.shipment_index {
            Some(index) => write!(
                f,
                "Shipment {}: field '{}': {}",
                index, self.field, self.message
            ),
            None => write!(f, "Shipping profile: field '{}': {}", self.field, self.message),
        }
    }
}

/// Errors that can occur while driving the checkout shipping workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The workflow was entered without a required precondition.
    Precondition(String),
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The requested step transition is not permitted.
    InvalidTransition {
        /// The current step.
        from: CheckoutStep,
        /// The requested step.
        to: CheckoutStep,
    },
    /// A collaborator failed while loading entities.
    Storage(StorageError),
    /// Persistence failed during commit.
    Commit(CommitError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Precondition(msg) => write!(f, "Precondition violated: {msg}"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidTransition { from, to } => {
                write!(f, "Invalid workflow transition: {from} -> {to}")
            }
            Self::Storage(err) => write!(f, "Storage failure: {err}"),
            Self::Commit(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<CommitError> for CoreError {
    fn from(err: CommitError) -> Self {
        Self::Commit(err)
    }
}

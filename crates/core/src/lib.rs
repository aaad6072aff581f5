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
mod reconcile;
mod state;
mod traits;
mod workflow;

#[cfg(test)]
mod tests;

pub use error::{CommitError, CommitPhase, CoreError, ValidationFailure};
pub use reconcile::{Reconciliation, ShipmentEdit, reconcile};
pub use state::{CheckoutStep, WorkflowState};
pub use traits::{
    Packer, ShipmentFormHandler, ShipmentSubmission, Storage, StorageError,
};
pub use workflow::{
    ActionKind, CheckoutSubmission, CheckoutWorkflow, SubmitOutcome, TriggerAction,
    ValidationScope, WorkflowConfig,
};

// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::reconcile::ShipmentEdit;
use shipflow_domain::{Order, ShippingProfile};

/// The step the checkout shipping workflow is currently in.
///
/// Steps govern which operations are permitted during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckoutStep {
    /// Session created, nothing rendered yet.
    #[default]
    Initial,
    /// Shipments rendered, no repack pending.
    Displayed,
    /// A repack has been requested and is about to run.
    RepackRequested,
    /// A terminal commit action was submitted and is being validated.
    Validating,
    /// All shipments and the order were persisted. Terminal.
    Committed,
}

impl CheckoutStep {
    /// Converts this step to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Displayed => "Displayed",
            Self::RepackRequested => "RepackRequested",
            Self::Validating => "Validating",
            Self::Committed => "Committed",
        }
    }

    /// Checks if a transition from this step to another is valid.
    ///
    /// Valid transitions are:
    /// - Initial → Displayed (entry without an initial repack)
    /// - Initial → `RepackRequested` (entry with an initial repack)
    /// - Displayed → `RepackRequested`
    /// - Displayed → Validating
    /// - `RepackRequested` → Displayed
    /// - Validating → Committed
    /// - Validating → Displayed (validation or commit failed)
    /// - Validating → `RepackRequested` (auto-corrected commit attempt)
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Initial, Self::Displayed)
                | (Self::Initial, Self::RepackRequested)
                | (Self::Displayed, Self::RepackRequested)
                | (Self::Displayed, Self::Validating)
                | (Self::RepackRequested, Self::Displayed)
                | (Self::Validating, Self::Committed)
                | (Self::Validating, Self::Displayed)
                | (Self::Validating, Self::RepackRequested)
        )
    }

    /// Returns whether this step is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The state of one interactive checkout shipping session.
///
/// A session is single-threaded: each request is processed to completion
/// before the next is accepted, and nothing outside this struct survives
/// between request round-trips until commit.
///
/// Invariant: the identifiers carried by `edits` and the identifiers in
/// `removed` partition the set of shipments known to the session; no
/// identifier ever appears in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowState {
    /// The current workflow step.
    pub step: CheckoutStep,
    /// The order this session edits.
    pub order: Order,
    /// The active shipping profile, pending persistence until commit.
    pub shipping_profile: ShippingProfile,
    /// The countries the buyer may select, from the store configuration.
    pub available_countries: Vec<String>,
    /// Whether the next render must repack instead of reusing `edits`.
    pub recalculate_requested: bool,
    /// The editable shipments, in reconciliation order.
    pub edits: Vec<ShipmentEdit>,
    /// Durable identifiers of shipments slated for deletion at commit.
    pub removed: Vec<i64>,
    /// User-facing warnings collected during the session.
    pub warnings: Vec<String>,
}

impl WorkflowState {
    /// Creates a new session state in the `Initial` step.
    ///
    /// # Arguments
    ///
    /// * `order` - The order this session edits
    /// * `shipping_profile` - The resolved active shipping profile
    /// * `available_countries` - Selectable countries from the store
    #[must_use]
    pub const fn new(
        order: Order,
        shipping_profile: ShippingProfile,
        available_countries: Vec<String>,
    ) -> Self {
        Self {
            step: CheckoutStep::Initial,
            order,
            shipping_profile,
            available_countries,
            recalculate_requested: false,
            edits: Vec::new(),
            removed: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Renders the editable shipment set.
    ///
    /// Rendering is a pure read: calling it repeatedly without an
    /// intervening repack or edit yields identical contents.
    #[must_use]
    pub fn render(&self) -> &[ShipmentEdit] {
        &self.edits
    }

    /// Advances the workflow to the given step.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` if the step graph does not
    /// permit the move.
    pub fn advance(&mut self, target: CheckoutStep) -> Result<(), crate::error::CoreError> {
        if !self.step.can_transition_to(target) {
            return Err(crate::error::CoreError::InvalidTransition {
                from: self.step,
                to: target,
            });
        }
        self.step = target;
        Ok(())
    }
}

// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CommitError, CommitPhase, CoreError, ValidationFailure};
use crate::reconcile::{Reconciliation, ShipmentEdit, reconcile};
use crate::state::{CheckoutStep, WorkflowState};
use crate::traits::{Packer, ShipmentFormHandler, ShipmentSubmission, Storage};
use shipflow_domain::{
    Order, ProposedShipment, Shipment, ShippingProfile, representative_profile, validate_order,
};
use tracing::{debug, info, warn};

/// The input the hosting checkout framework hands to [`CheckoutWorkflow::begin`].
#[derive(Debug, Clone, Default)]
pub struct WorkflowConfig {
    /// The order to edit shipping for. Required.
    pub order: Option<Order>,
    /// Whether entry repacks even when persisted shipments already exist.
    pub force_packing: bool,
}

impl WorkflowConfig {
    /// Creates a config for the given order with packing forced on entry.
    #[must_use]
    pub const fn new(order: Order) -> Self {
        Self {
            order: Some(order),
            force_packing: true,
        }
    }
}

/// Classification of the action that triggered a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The step's terminal commit action (e.g., "Continue to review").
    Primary,
    /// Any other action.
    Secondary,
}

/// Metadata about the action that triggered a submission.
///
/// The hosting framework reads this off the triggering element; the
/// workflow uses it to decide between committing, recalculating and
/// auto-correcting a skipped recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerAction {
    /// Whether the action explicitly requests recalculation.
    pub recalculate: bool,
    /// The action's classification.
    pub kind: ActionKind,
}

impl TriggerAction {
    /// The explicit "recalculate shipping" action.
    #[must_use]
    pub const fn recalculate() -> Self {
        Self {
            recalculate: true,
            kind: ActionKind::Secondary,
        }
    }

    /// The terminal commit action.
    #[must_use]
    pub const fn primary() -> Self {
        Self {
            recalculate: false,
            kind: ActionKind::Primary,
        }
    }
}

/// The submitted values of the whole shipping step.
#[derive(Debug, Clone)]
pub struct CheckoutSubmission {
    /// The profile sub-step's submitted profile.
    pub shipping_profile: ShippingProfile,
    /// Per-shipment submitted field values, indexed like the rendered set.
    pub shipments: Vec<ShipmentSubmission>,
}

/// The subtree a validation pass covers.
///
/// Validation is deliberately partial: the recalculate action only needs a
/// valid shipping profile, since the shipment fields it submits are about
/// to be discarded by the repack anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationScope {
    /// Validate the profile sub-step only.
    Profile,
    /// Validate the profile sub-step and the displayed shipment sub-forms.
    ProfileAndShipments,
}

/// The result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All shipments and the order were persisted.
    Committed,
    /// The workflow repacked and must be re-displayed; nothing was persisted.
    Redisplayed,
    /// Validation failed; the workflow returned to the edit step with the
    /// submitted values retained.
    Invalid(Vec<ValidationFailure>),
}

/// The interactive checkout shipping workflow.
///
/// Drives the propose → review → recalculate → confirm loop for one order:
/// resolves the active shipping profile, runs the packer and reconciles
/// its output against persisted shipments, surfaces the surviving
/// shipments for editing, and persists everything on confirmation.
///
/// Collaborators are injected; the workflow itself holds no session state.
/// All session state lives in the [`WorkflowState`] passed into each call.
pub struct CheckoutWorkflow<P: Packer, F: ShipmentFormHandler> {
    packer: P,
    form_handler: F,
}

impl<P: Packer, F: ShipmentFormHandler> CheckoutWorkflow<P, F> {
    /// Creates a new `CheckoutWorkflow` with injected collaborators.
    ///
    /// # Arguments
    ///
    /// * `packer` - The packing process
    /// * `form_handler` - Per-shipment field extraction and validation
    #[must_use]
    pub const fn new(packer: P, form_handler: F) -> Self {
        Self {
            packer,
            form_handler,
        }
    }

    /// Returns the injected packer.
    #[must_use]
    pub const fn packer(&self) -> &P {
        &self.packer
    }

    /// Starts a session for the configured order.
    ///
    /// Resolves the active shipping profile from the first existing
    /// shipment, or synthesizes a fresh default profile for the order's
    /// customer. An initial repack runs unless packing is not forced and
    /// persisted shipments already exist, in which case those shipments
    /// are rendered as-is.
    ///
    /// # Errors
    ///
    /// * `CoreError::Precondition` if the config carries no order
    /// * `CoreError::DomainViolation` if the order reference is invalid
    /// * `CoreError::Storage` if the representative profile cannot be loaded
    pub fn begin<S: Storage>(
        &self,
        config: WorkflowConfig,
        storage: &S,
    ) -> Result<WorkflowState, CoreError> {
        let order: Order = config.order.ok_or_else(|| {
            CoreError::Precondition(String::from(
                "The checkout shipping step requires an order",
            ))
        })?;
        validate_order(&order)?;

        let shipping_profile: ShippingProfile = match representative_profile(&order.shipments) {
            Some(profile_id) => {
                debug!(order_id = order.order_id, profile_id, "reusing first shipment's profile");
                storage.load_profile(profile_id).map_err(CoreError::Storage)?
            }
            None => {
                debug!(order_id = order.order_id, "synthesizing default shipping profile");
                ShippingProfile::new(order.customer_id, order.store.default_country.clone())
            }
        };
        let available_countries: Vec<String> = order.store.shipping_countries.clone();
        let mut state: WorkflowState =
            WorkflowState::new(order, shipping_profile, available_countries);

        if config.force_packing || state.order.shipments.is_empty() {
            self.repack(&mut state)?;
        } else {
            // The persisted shipments are rendered as-is; their edits must
            // not be discarded by a no-op render.
            state.edits = state
                .order
                .shipments
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, shipment)| ShipmentEdit { index, shipment })
                .collect();
            state.advance(CheckoutStep::Displayed)?;
        }
        Ok(state)
    }

    /// Runs the packer and reconciles its output against the order's
    /// persisted shipments.
    ///
    /// The resulting surviving and removed sets fully supersede the prior
    /// ones; a repack is never partially applied.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` if the session is not in a
    /// step that permits repacking.
    pub fn repack(&self, state: &mut WorkflowState) -> Result<(), CoreError> {
        state.advance(CheckoutStep::RepackRequested)?;

        let proposed: Vec<ProposedShipment> =
            self.packer
                .pack(&state.order, &state.shipping_profile, &state.order.shipments);
        let proposed_count: usize = proposed.len();
        let reconciliation: Reconciliation = reconcile(&state.order.shipments, proposed);
        debug!(
            order_id = state.order.order_id,
            proposed = proposed_count,
            surviving = reconciliation.surviving.len(),
            removed = reconciliation.removed.len(),
            "repacked order"
        );

        state.edits = reconciliation.surviving;
        state.removed = reconciliation.removed;
        state.recalculate_requested = false;
        state.advance(CheckoutStep::Displayed)?;
        Ok(())
    }

    /// Handles the explicit "recalculate shipping" action.
    ///
    /// Only the profile sub-step is validated; shipment fields are about to
    /// be discarded by the repack. The submitted profile is carried forward
    /// as the new active profile so the next pack reflects the buyer's
    /// latest address edits.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` if the session cannot repack.
    pub fn recalculate(
        &self,
        state: &mut WorkflowState,
        submitted_profile: ShippingProfile,
    ) -> Result<SubmitOutcome, CoreError> {
        let failures: Vec<ValidationFailure> =
            validate_profile(&submitted_profile, &state.available_countries);
        if !failures.is_empty() {
            return Ok(SubmitOutcome::Invalid(failures));
        }

        state.recalculate_requested = true;
        state.shipping_profile = submitted_profile;
        self.repack(state)?;
        Ok(SubmitOutcome::Redisplayed)
    }

    /// Validates a submission within the given scope.
    ///
    /// Shipment validation writes the submitted values into the backing
    /// entities first, so the buyer's input survives a failed validation.
    /// Fields outside the scope's subtree are exempt.
    #[must_use]
    pub fn validate(
        &self,
        state: &mut WorkflowState,
        submission: &CheckoutSubmission,
        scope: ValidationScope,
    ) -> Vec<ValidationFailure> {
        let mut failures: Vec<ValidationFailure> =
            validate_profile(&submission.shipping_profile, &state.available_countries);
        if scope == ValidationScope::Profile {
            return failures;
        }

        // Every displayed sub-form is validated, whether or not values were
        // submitted for it. A missing sub-form validates as empty input.
        let empty: ShipmentSubmission = ShipmentSubmission::new();
        for edit in &mut state.edits {
            let values: &ShipmentSubmission =
                submission.shipments.get(edit.index).unwrap_or(&empty);
            self.form_handler.extract_values(&mut edit.shipment, values);
            for (field, message) in self.form_handler.validate_values(&edit.shipment, values) {
                failures.push(ValidationFailure {
                    shipment_index: Some(edit.index),
                    field,
                    message,
                });
            }
        }
        failures
    }

    /// Handles submission of the shipping step.
    ///
    /// A recalculate trigger repacks instead of committing. A primary
    /// submission while no shipments were ever computed is auto-corrected:
    /// a warning is recorded, a repack is forced and the step re-displays
    /// rather than committing. Otherwise the submission is validated and,
    /// if clean, committed.
    ///
    /// # Errors
    ///
    /// * `CoreError::InvalidTransition` if the session is already committed
    /// * `CoreError::Commit` if persistence fails; the step returns to
    ///   `Displayed` and the whole commit is retried on the next submission
    pub fn submit<S: Storage>(
        &self,
        state: &mut WorkflowState,
        submission: CheckoutSubmission,
        trigger: TriggerAction,
        storage: &mut S,
    ) -> Result<SubmitOutcome, CoreError> {
        if state.step.is_terminal() {
            return Err(CoreError::InvalidTransition {
                from: state.step,
                to: CheckoutStep::Validating,
            });
        }

        let mut recalculate: bool = trigger.recalculate;
        if !recalculate && trigger.kind == ActionKind::Primary && state.edits.is_empty() {
            // The step was submitted without shipping ever being
            // calculated. Force the recalculation now and re-display.
            warn!(
                order_id = state.order.order_id,
                "commit attempted before shipping was calculated"
            );
            state
                .warnings
                .push(String::from("Please select a shipping method."));
            recalculate = true;
        }
        if recalculate {
            return self.recalculate(state, submission.shipping_profile);
        }

        state.advance(CheckoutStep::Validating)?;
        let failures: Vec<ValidationFailure> =
            self.validate(state, &submission, ValidationScope::ProfileAndShipments);
        if !failures.is_empty() {
            state.advance(CheckoutStep::Displayed)?;
            return Ok(SubmitOutcome::Invalid(failures));
        }

        state.shipping_profile = submission.shipping_profile;
        match self.commit(state, storage) {
            Ok(()) => {
                state.advance(CheckoutStep::Committed)?;
                Ok(SubmitOutcome::Committed)
            }
            Err(err) => {
                state.advance(CheckoutStep::Displayed)?;
                Err(CoreError::Commit(err))
            }
        }
    }

    /// Persists the session: the confirmed profile, every surviving
    /// shipment, the order with its final shipment set, and the batched
    /// deletion of removed shipments.
    ///
    /// The storage implementation is expected to wrap one commit in a
    /// single transaction; any failure here is treated as the entire
    /// commit failing.
    fn commit<S: Storage>(
        &self,
        state: &mut WorkflowState,
        storage: &mut S,
    ) -> Result<(), CommitError> {
        let profile_id: i64 = storage
            .save_profile(&mut state.shipping_profile)
            .map_err(|source| CommitError {
                phase: CommitPhase::SaveProfile,
                source,
            })?;

        for edit in &mut state.edits {
            edit.shipment.attach_profile(profile_id);
            storage
                .save_shipment(&mut edit.shipment)
                .map_err(|source| CommitError {
                    phase: CommitPhase::SaveShipment,
                    source,
                })?;
        }

        state.order.shipments = state
            .edits
            .iter()
            .map(|edit| edit.shipment.clone())
            .collect();
        storage
            .save_order(&state.order)
            .map_err(|source| CommitError {
                phase: CommitPhase::SaveOrder,
                source,
            })?;

        if !state.removed.is_empty() {
            let removed: Vec<Shipment> =
                storage
                    .load_shipments(&state.removed)
                    .map_err(|source| CommitError {
                        phase: CommitPhase::DeleteShipments,
                        source,
                    })?;
            storage
                .delete_shipments(&removed)
                .map_err(|source| CommitError {
                    phase: CommitPhase::DeleteShipments,
                    source,
                })?;
            info!(
                order_id = state.order.order_id,
                deleted = state.removed.len(),
                "deleted superseded shipments"
            );
        }
        state.removed.clear();

        info!(
            order_id = state.order.order_id,
            shipments = state.edits.len(),
            "committed shipping step"
        );
        Ok(())
    }
}

/// Validates the profile sub-step.
///
/// With a country restriction configured on the store, the profile's
/// destination must be one of the selectable countries.
fn validate_profile(
    profile: &ShippingProfile,
    available_countries: &[String],
) -> Vec<ValidationFailure> {
    let mut failures: Vec<ValidationFailure> = Vec::new();
    if !available_countries.is_empty()
        && !available_countries
            .iter()
            .any(|country| country == &profile.country_code)
    {
        failures.push(ValidationFailure {
            shipment_index: None,
            field: String::from("country_code"),
            message: format!("The store does not ship to {}", profile.country_code),
        });
    }
    failures
}

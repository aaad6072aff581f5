// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shipflow_domain::{ProposedShipment, Shipment};

/// One editable shipment surfaced by reconciliation.
///
/// The index is assigned at reconciliation time and stays stable for the
/// lifetime of the rendered set, so independent edits to different
/// sub-forms land on the right shipment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentEdit {
    /// The stable position of this shipment within the rendered set.
    pub index: usize,
    /// The backing shipment entity being edited.
    pub shipment: Shipment,
}

/// The three-way plan produced by reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Editable shipments, in proposed order. Each is either a reused
    /// existing shipment or a freshly constructed one.
    pub surviving: Vec<ShipmentEdit>,
    /// Durable identifiers of existing shipments with no corresponding
    /// proposed shipment. Slated for deletion at commit.
    pub removed: Vec<i64>,
}

/// Maps proposed shipments onto the order's existing shipments.
///
/// Repacking is a coarse-grained recomputation: proposed and existing
/// shipments are aligned positionally up to the length of the shorter
/// list, and any excess existing shipments are marked removed. No
/// item-level diffing across reshuffled shipments is attempted.
///
/// A reused pairing keeps the existing shipment's identity, title and
/// buyer selections and adopts the proposed contents. A fresh pairing
/// starts from default field values plus the proposed contents. With zero
/// proposed shipments every existing shipment is removed and nothing is
/// editable.
///
/// This function performs no I/O; persistence of the plan is the caller's
/// responsibility after validation succeeds.
#[must_use]
pub fn reconcile(existing: &[Shipment], proposed: Vec<ProposedShipment>) -> Reconciliation {
    let mut surviving: Vec<ShipmentEdit> = Vec::with_capacity(proposed.len());
    for (index, proposed_shipment) in proposed.iter().enumerate() {
        let mut shipment: Shipment = existing.get(index).map_or_else(
            || {
                Shipment::new(
                    proposed_shipment.order_id(),
                    format!("Shipment #{}", index + 1),
                )
            },
            Clone::clone,
        );
        shipment.populate_from_proposed(proposed_shipment);
        surviving.push(ShipmentEdit { index, shipment });
    }

    // Existing shipments beyond the proposed count are dropped. Only ones
    // that were ever persisted need a deletion later.
    let removed: Vec<i64> = existing
        .iter()
        .skip(proposed.len())
        .filter_map(|shipment| shipment.shipment_id)
        .collect();

    Reconciliation { surviving, removed }
}

// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Shipment;

/// Resolves the representative shipping profile of an ordered shipment list.
///
/// The shipping profile is assumed to be the same for all shipments.
/// Therefore, it is taken from the first known shipment. The checkout
/// workflow's profile default and the address-book synchronizer both rely
/// on this helper so the "first shipment wins" rule cannot diverge.
///
/// # Arguments
///
/// * `shipments` - The shipments, in the order they are attached to the order
///
/// # Returns
///
/// The first shipment's profile ID, or `None` when there are no shipments
/// or the first shipment carries no profile.
#[must_use]
pub fn representative_profile(shipments: &[Shipment]) -> Option<i64> {
    shipments.first().and_then(|shipment| shipment.shipping_profile_id)
}

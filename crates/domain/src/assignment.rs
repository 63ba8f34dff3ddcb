// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability-to-assignment projection and deterministic gig ordering.
//!
//! While a gig is in `Planning`, its assigned-gent set is not
//! independently editable: it is a projection of which gents currently
//! hold `Assigned` availability status for the gig. Outside `Planning`
//! the set decouples from availability and becomes direct manager state.

use crate::types::{AvailabilityEntry, AvailabilityStatus, Gig, Phase};

/// Sorts gigs ascending by (date, title) for deterministic presentation.
///
/// The sort is stable, and total when (date, title) pairs are unique.
pub fn sort_gigs(gigs: &mut [Gig]) {
    gigs.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
}

/// Returns the gent ids holding `Assigned` status, in ascending id order.
#[must_use]
pub fn assigned_gent_ids(entries: &[AvailabilityEntry]) -> Vec<i64> {
    let mut ids: Vec<i64> = entries
        .iter()
        .filter(|e| e.status == AvailabilityStatus::Assigned)
        .map(|e| e.gent_id)
        .collect();
    ids.sort_unstable();
    ids
}

/// Applies the planning-phase projection to a gig's assigned set.
///
/// No-op outside `Planning`: in those phases the assigned set is the
/// source of truth and availability has no bearing on it.
pub fn project_assignment(gig: &mut Gig, entries: &[AvailabilityEntry]) {
    if gig.phase == Phase::Planning {
        gig.gent_ids = assigned_gent_ids(entries);
    }
}

/// Upserts a gent's status into a local availability collection.
///
/// This is the optimistic half of an availability mutation; the server
/// remains the authority and is re-fetched afterwards.
pub fn apply_availability(
    entries: &mut Vec<AvailabilityEntry>,
    gent_id: i64,
    status: AvailabilityStatus,
) {
    if let Some(entry) = entries.iter_mut().find(|e| e.gent_id == gent_id) {
        entry.status = status;
    } else {
        entries.push(AvailabilityEntry { gent_id, status });
    }
}

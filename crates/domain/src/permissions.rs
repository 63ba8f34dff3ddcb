// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role- and phase-conditional permission rules.
//!
//! These are pure functions independent of any rendering layer. They are
//! advisory on the client side: the server enforces the same rules
//! authoritatively on every availability mutation.

use crate::types::{AvailabilityStatus, Phase, Role};

/// Statuses a manager may set on any gent's row.
const MANAGER_STATUSES: [AvailabilityStatus; 4] = [
    AvailabilityStatus::NoReply,
    AvailabilityStatus::Available,
    AvailabilityStatus::Unavailable,
    AvailabilityStatus::Assigned,
];

/// Statuses a gent may set on its own row. `Assigned` is manager-only.
const GENT_STATUSES: [AvailabilityStatus; 3] = [
    AvailabilityStatus::NoReply,
    AvailabilityStatus::Available,
    AvailabilityStatus::Unavailable,
];

/// Returns whether the acting session may edit a gent's availability row.
///
/// A manager may edit any row. A gent may edit only its own row, and only
/// when the session knows which gent it is acting as.
#[must_use]
pub const fn can_edit_availability(
    role: Role,
    acting_gent_id: Option<i64>,
    target_gent_id: i64,
) -> bool {
    match role {
        Role::Manager => true,
        Role::Gent => matches!(acting_gent_id, Some(id) if id == target_gent_id),
    }
}

/// Returns whether the acting role may set the given status at all.
///
/// Only managers may set `Assigned`; assignment is the mechanism by which
/// planning-phase booking happens and is never gent-initiated.
#[must_use]
pub const fn can_set_status(role: Role, status: AvailabilityStatus) -> bool {
    match role {
        Role::Manager => true,
        Role::Gent => !matches!(status, AvailabilityStatus::Assigned),
    }
}

/// Returns whether the assigned-gent set may be edited directly.
///
/// During `Planning` the set is a projection of availability and must not
/// be edited; in every other phase it is directly manager-editable.
#[must_use]
pub const fn can_set_assigned_directly(phase: Phase) -> bool {
    !matches!(phase, Phase::Planning)
}

/// Returns the statuses the given role may choose from.
///
/// Intended for front-ends building choice lists, so that a gent session
/// is never offered `Assigned` as an option.
#[must_use]
pub const fn allowed_statuses(role: Role) -> &'static [AvailabilityStatus] {
    match role {
        Role::Manager => &MANAGER_STATUSES,
        Role::Gent => &GENT_STATUSES,
    }
}

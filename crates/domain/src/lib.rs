// Copyright (C) 2026 Fred Clausen
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

mod assignment;
mod error;
mod permissions;
mod types;

#[cfg(test)]
mod tests;

pub use assignment::{apply_availability, assigned_gent_ids, project_assignment, sort_gigs};
pub use error::DomainError;
pub use permissions::{
    allowed_statuses, can_edit_availability, can_set_assigned_directly, can_set_status,
};
pub use types::{AvailabilityEntry, AvailabilityStatus, Gent, Gig, Phase, Role};

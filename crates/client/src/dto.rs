// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire data transfer objects.
//!
//! These are distinct from domain types where the wire shape differs:
//! server records always carry a real id, and outgoing payloads never
//! carry one (the server assigns it on create, the URL names it on
//! update). `Gent` and `AvailabilityEntry` match the wire exactly and
//! are decoded directly.

use gigbook_domain::{AvailabilityStatus, Gig, Phase};
use serde::{Deserialize, Serialize};
use time::Date;

/// A gig as the server serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigRecord {
    /// Server-assigned identifier.
    pub id: i64,
    /// Title shown in listings.
    pub title: String,
    /// Calendar day, `yyyy-MM-dd`.
    pub date: Date,
    /// Fee as a decimal currency amount.
    pub fee: f64,
    /// Free-text notes.
    pub notes: String,
    /// Workflow stage.
    pub phase: Phase,
    /// Assigned gent identifiers.
    pub gent_ids: Vec<i64>,
}

impl From<GigRecord> for Gig {
    fn from(record: GigRecord) -> Self {
        Self {
            id: Some(record.id),
            title: record.title,
            date: record.date,
            fee: record.fee,
            notes: record.notes,
            phase: record.phase,
            gent_ids: record.gent_ids,
        }
    }
}

/// Outgoing gig payload for create and full-record update.
///
/// The client always sends every field, even though the server's update
/// route tolerates partial bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GigPayload {
    /// Title shown in listings.
    pub title: String,
    /// Calendar day, `yyyy-MM-dd`.
    pub date: Date,
    /// Fee as a decimal currency amount.
    pub fee: f64,
    /// Free-text notes.
    pub notes: String,
    /// Workflow stage.
    pub phase: Phase,
    /// Assigned gent identifiers.
    pub gent_ids: Vec<i64>,
}

impl GigPayload {
    /// Builds a payload from a gig's editable fields, draft or persisted.
    #[must_use]
    pub fn from_gig(gig: &Gig) -> Self {
        Self {
            title: gig.title.clone(),
            date: gig.date,
            fee: gig.fee,
            notes: gig.notes.clone(),
            phase: gig.phase,
            gent_ids: gig.gent_ids.clone(),
        }
    }
}

/// Body of a set-availability request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityUpdatePayload {
    /// The gent whose row is being set.
    pub gent_id: i64,
    /// The new status.
    pub status: AvailabilityStatus,
}

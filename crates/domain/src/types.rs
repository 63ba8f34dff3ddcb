// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Workflow stage of a gig.
///
/// Ordered by workflow progression. There are no automatic transitions:
/// a manager explicitly sets the phase, and any phase may follow any other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Assignment is still being worked out via availability polling.
    #[default]
    Planning,
    /// The gig is confirmed and the assigned set is fixed by a manager.
    Booked,
    /// The gig has taken place.
    Completed,
}

impl FromStr for Phase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(Self::Planning),
            "booked" => Ok(Self::Booked),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidPhase(s.to_string())),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Phase {
    /// Converts this phase to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Booked => "booked",
            Self::Completed => "completed",
        }
    }
}

/// A gent's declared stance on a gig.
///
/// The default when no availability row exists is `NoReply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// The gent has not answered yet.
    #[default]
    NoReply,
    /// The gent declared themselves available.
    Available,
    /// The gent declared themselves unavailable.
    Unavailable,
    /// A manager assigned the gent to the gig.
    Assigned,
}

impl FromStr for AvailabilityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_reply" => Ok(Self::NoReply),
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            "assigned" => Ok(Self::Assigned),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AvailabilityStatus {
    /// Converts this status to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoReply => "no_reply",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Assigned => "assigned",
        }
    }
}

/// The role a session acts under.
///
/// Authorization is server-enforced; the role travels with every
/// availability mutation as the `actor_role` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sees all gigs, edits any availability row, assigns gents.
    #[default]
    Manager,
    /// Sees its own gigs, edits only its own availability row.
    Gent,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Self::Manager),
            "gent" => Ok(Self::Gent),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Gent => "gent",
        }
    }
}

/// A staff member who can be assigned to and polled about gigs.
///
/// Immutable reference data fetched once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gent {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional login name.
    pub username: Option<String>,
}

/// A bookable engagement.
///
/// `id` is `None` while the gig is a local draft that has not been
/// persisted; the server assigns the identifier on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gig {
    /// Server-assigned identifier. `None` marks an unsaved draft.
    pub id: Option<i64>,
    /// Title shown in listings.
    pub title: String,
    /// Calendar day of the engagement (no time-of-day).
    pub date: Date,
    /// Fee as a decimal currency amount.
    pub fee: f64,
    /// Free-text notes.
    pub notes: String,
    /// Workflow stage.
    pub phase: Phase,
    /// Assigned gent identifiers. While `phase == Planning` this is a
    /// projection of availability rows with status `Assigned` and must not
    /// be edited directly; in other phases it is the source of truth.
    pub gent_ids: Vec<i64>,
}

impl Gig {
    /// Creates a local-only draft gig.
    ///
    /// The draft has no identifier, phase `Planning`, today's date (UTC),
    /// zero fee, empty notes, and an assignment set seeded with the
    /// prefill gent if one is given.
    #[must_use]
    pub fn draft(prefill_gent_id: Option<i64>) -> Self {
        Self {
            id: None,
            title: String::from("New Gig"),
            date: OffsetDateTime::now_utc().date(),
            fee: 0.0,
            notes: String::new(),
            phase: Phase::Planning,
            gent_ids: prefill_gent_id.into_iter().collect(),
        }
    }

    /// Returns whether this gig is an unsaved local draft.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        self.id.is_none()
    }
}

/// One availability row for a (gig, gent) pair.
///
/// The server answers availability reads with one entry per known gent,
/// defaulting missing rows to `NoReply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    /// The gent this row belongs to.
    pub gent_id: i64,
    /// The gent's declared stance.
    pub status: AvailabilityStatus,
}

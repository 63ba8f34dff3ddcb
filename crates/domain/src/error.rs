// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Phase string is not one of planning/booked/completed.
    InvalidPhase(String),
    /// Availability status string is not recognized.
    InvalidStatus(String),
    /// Role string is not manager or gent.
    InvalidRole(String),
    /// No gig with the given identifier is known locally.
    GigNotFound(i64),
    /// The operation requires a persisted gig, but the gig is a draft.
    UnsavedGig,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPhase(s) => write!(f, "Invalid phase: '{s}'"),
            Self::InvalidStatus(s) => write!(f, "Invalid availability status: '{s}'"),
            Self::InvalidRole(s) => write!(f, "Invalid role: '{s}'"),
            Self::GigNotFound(id) => write!(f, "Gig {id} not found"),
            Self::UnsavedGig => write!(f, "Operation requires a persisted gig, not a draft"),
        }
    }
}

impl std::error::Error for DomainError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook_domain::{AvailabilityEntry, Gent, Gig, Phase, Role};

/// The in-memory view of the current session.
///
/// This is an explicit state object, not a reactive graph: every
/// recomputation point is an enumerated controller operation, and the
/// server remains the source of truth between refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The role this session acts under.
    pub role: Role,
    /// Reference roster of all known gents, fetched once per session.
    pub gents: Vec<Gent>,
    /// The gent the session acts as (gent role) or inspects (manager).
    pub selected_gent_id: Option<i64>,
    /// The current gig list, sorted ascending by (date, title).
    pub gigs: Vec<Gig>,
    /// The currently selected gig, if any.
    pub selected_gig_id: Option<i64>,
    /// Availability rows for the selected gig while it is in `Planning`;
    /// empty otherwise.
    pub availability: Vec<AvailabilityEntry>,
}

impl Session {
    /// Creates an empty session for the given role.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            gents: Vec::new(),
            selected_gent_id: None,
            gigs: Vec::new(),
            selected_gig_id: None,
            availability: Vec::new(),
        }
    }

    /// Returns the currently selected gig, if any.
    #[must_use]
    pub fn selected_gig(&self) -> Option<&Gig> {
        let id: i64 = self.selected_gig_id?;
        self.gigs.iter().find(|g| g.id == Some(id))
    }

    /// Returns whether the selected gig is in `Planning` and therefore
    /// carries availability rows.
    #[must_use]
    pub fn selected_gig_in_planning(&self) -> bool {
        self.selected_gig()
            .is_some_and(|g| g.phase == Phase::Planning)
    }

    /// Looks up a gent's display name from the roster.
    #[must_use]
    pub fn gent_name(&self, gent_id: i64) -> Option<&str> {
        self.gents
            .iter()
            .find(|g| g.id == gent_id)
            .map(|g| g.name.as_str())
    }

    /// The gent id the session acts as when mutating availability.
    ///
    /// Managers act without a gent identity; gents act as the selected
    /// gent.
    #[must_use]
    pub const fn acting_gent_id(&self) -> Option<i64> {
        match self.role {
            Role::Manager => None,
            Role::Gent => self.selected_gent_id,
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The application state controller.
//!
//! Owns the session state and keeps it consistent with the server after
//! every mutation: each user-initiated action is one network round trip
//! followed by one unconditional authoritative refresh. Optimistic local
//! updates are always followed by that corrective re-fetch, so any
//! divergence is short-lived and self-healing.

use crate::error::CoreError;
use crate::session::Session;
use gigbook_client::GigService;
use gigbook_domain::{
    AvailabilityEntry, AvailabilityStatus, DomainError, Gig, Phase, Role, apply_availability,
    can_edit_availability, can_set_status, project_assignment, sort_gigs,
};
use tracing::{debug, warn};

/// Orchestrates fetches, optimistic updates, and re-synchronization
/// against a [`GigService`].
///
/// All mutation happens through `&mut self`, so a session never runs two
/// state mutations concurrently; ordering relies on request/response
/// sequencing, not locks.
#[derive(Debug)]
pub struct SessionController<S: GigService> {
    service: S,
    session: Session,
}

impl<S: GigService> SessionController<S> {
    /// Creates a controller with an empty session for the given role.
    pub const fn new(service: S, role: Role) -> Self {
        Self {
            service,
            session: Session::new(role),
        }
    }

    /// Read access to the session state.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Sets the gent the session acts as or inspects, without fetching.
    ///
    /// Intended for setup before [`Self::load_initial`], which performs
    /// the one initial fetch; [`Self::select_gent`] is the refreshing
    /// variant for mid-session selection changes.
    pub const fn set_gent(&mut self, gent_id: Option<i64>) {
        self.session.selected_gent_id = gent_id;
    }

    /// Selects the gent the session acts as or inspects, then refreshes
    /// the gig list under the new filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh fails.
    pub async fn select_gent(&mut self, gent_id: Option<i64>) -> Result<(), CoreError> {
        self.session.selected_gent_id = gent_id;
        self.refresh_gigs().await
    }

    /// Selects a gig and reloads its availability view.
    ///
    /// # Errors
    ///
    /// Returns an error if the gig is not in the current list.
    pub async fn select_gig(&mut self, gig_id: i64) -> Result<(), CoreError> {
        if !self.session.gigs.iter().any(|g| g.id == Some(gig_id)) {
            return Err(CoreError::Domain(DomainError::GigNotFound(gig_id)));
        }
        self.session.selected_gig_id = Some(gig_id);
        self.sync_availability().await;
        Ok(())
    }

    /// Performs the initial session load.
    ///
    /// Fetches the gent roster; a gent-role session with no selection
    /// defaults to the first gent. Then refreshes the gig list. Failures
    /// are logged and leave empty collections rather than propagating:
    /// a failed initial load is never fatal.
    pub async fn load_initial(&mut self) {
        match self.service.list_gents().await {
            Ok(gents) => {
                self.session.gents = gents;
                if self.session.role == Role::Gent && self.session.selected_gent_id.is_none() {
                    self.session.selected_gent_id = self.session.gents.first().map(|g| g.id);
                }
            }
            Err(err) => {
                warn!(%err, "Initial gent load failed; continuing with empty roster");
            }
        }
        if let Err(err) = self.refresh_gigs().await {
            warn!(%err, "Initial gig refresh failed; continuing with empty list");
        }
    }

    /// Re-fetches the gig list from the server of record.
    ///
    /// Manager sessions fetch unfiltered; gent sessions filter to the
    /// selected gent. Results are sorted ascending by (date, title). If
    /// the previously selected gig survives the refresh it stays
    /// selected; otherwise the first gig of the sorted list is selected,
    /// or none if the list is empty. The availability view follows the
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; local state is unchanged in
    /// that case.
    pub async fn refresh_gigs(&mut self) -> Result<(), CoreError> {
        let filter: Option<i64> = match self.session.role {
            Role::Manager => None,
            Role::Gent => self.session.selected_gent_id,
        };
        let mut gigs: Vec<Gig> = self.service.list_gigs(filter).await?;
        sort_gigs(&mut gigs);

        let previous: Option<i64> = self.session.selected_gig_id;
        self.session.gigs = gigs;
        self.session.selected_gig_id = previous
            .filter(|id| self.session.gigs.iter().any(|g| g.id == Some(*id)))
            .or_else(|| self.session.gigs.first().and_then(|g| g.id));

        debug!(
            count = self.session.gigs.len(),
            selected = ?self.session.selected_gig_id,
            "Refreshed gigs"
        );
        self.sync_availability().await;
        Ok(())
    }

    /// Fetches availability rows for a gig, best-effort.
    ///
    /// A failed read yields an empty list rather than an error; the next
    /// refresh will retry.
    pub async fn load_availability(&self, gig_id: i64) -> Vec<AvailabilityEntry> {
        match self.service.get_availability(gig_id).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(%err, gig_id, "Availability load failed; treating as empty");
                Vec::new()
            }
        }
    }

    /// Sets one gent's availability on a gig, optimistically, then
    /// re-syncs from the server.
    ///
    /// When the target gig is the selected one, the local availability
    /// row and the planning-phase assignment projection are updated
    /// speculatively before the request is issued; other gigs rely on
    /// the refresh alone, since the local rows are the selected gig's.
    /// The refresh runs unconditionally afterwards, on success
    /// and on failure: setting a gent to `Assigned` changes the gig's
    /// derived assignment set, and a failed mutation must roll the
    /// speculation back to server truth.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` (without issuing a request) if the
    /// session role may not edit the target row or set the status, or the
    /// transport error if the mutation or refresh failed.
    pub async fn update_availability(
        &mut self,
        gig_id: i64,
        gent_id: i64,
        status: AvailabilityStatus,
    ) -> Result<(), CoreError> {
        let role: Role = self.session.role;
        let acting: Option<i64> = self.session.acting_gent_id();
        if !can_edit_availability(role, acting, gent_id) || !can_set_status(role, status) {
            return Err(CoreError::PermissionDenied {
                role,
                action: "set this availability status",
            });
        }

        // Optimistic local step; the refresh below is the authority. The
        // local availability rows belong to the selected gig, so only
        // that gig may be updated and projected from them.
        if self.session.selected_gig_id == Some(gig_id) {
            apply_availability(&mut self.session.availability, gent_id, status);
            if let Some(gig) = self.session.gigs.iter_mut().find(|g| g.id == Some(gig_id)) {
                project_assignment(gig, &self.session.availability);
            }
        }

        let outcome = self
            .service
            .set_availability(gig_id, gent_id, status, role, acting)
            .await;
        let refreshed: Result<(), CoreError> = self.refresh_gigs().await;

        outcome?;
        refreshed
    }

    /// Creates a gig from a local draft and selects the persisted result.
    ///
    /// # Errors
    ///
    /// Returns an error if the create or the follow-up refresh fails. A
    /// failed create selects nothing and leaves the draft untouched for
    /// retry.
    pub async fn create_gig(&mut self, draft: &Gig) -> Result<Gig, CoreError> {
        let created: Gig = self.service.create_gig(draft).await?;
        self.session.selected_gig_id = created.id;
        self.refresh_gigs().await?;
        Ok(created)
    }

    /// Saves a gig's full record and re-selects it.
    ///
    /// # Errors
    ///
    /// Returns `UnsavedGig` for drafts, or the transport error if the
    /// update or follow-up refresh fails. A failed save leaves local
    /// state as-is for retry.
    pub async fn save_gig(&mut self, gig: &Gig) -> Result<Gig, CoreError> {
        let id: i64 = gig.id.ok_or(CoreError::Domain(DomainError::UnsavedGig))?;
        let updated: Gig = self.service.update_gig(id, gig).await?;
        self.session.selected_gig_id = Some(id);
        self.refresh_gigs().await?;
        Ok(updated)
    }

    /// Changes a gig's phase.
    ///
    /// A phase change is a full-record update under the hood, not a
    /// distinct endpoint: the gig is located locally, its phase field
    /// mutated, and the result saved. Exactly one update call is issued,
    /// with all other fields unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GigNotFound` if the gig is not in the current list, or
    /// any error `save_gig` can return.
    pub async fn set_phase(&mut self, gig_id: i64, phase: Phase) -> Result<Gig, CoreError> {
        let mut gig: Gig = self
            .session
            .gigs
            .iter()
            .find(|g| g.id == Some(gig_id))
            .cloned()
            .ok_or(CoreError::Domain(DomainError::GigNotFound(gig_id)))?;
        gig.phase = phase;
        self.save_gig(&gig).await
    }

    /// Deletes a gig and re-syncs.
    ///
    /// The refresh runs regardless of the delete's outcome; if the
    /// deleted gig was selected, selection falls back to the new first
    /// gig (or none). An already-deleted gig (server 404) is success.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the delete or refresh failed.
    pub async fn delete_gig(&mut self, gig_id: i64) -> Result<(), CoreError> {
        let outcome = self.service.delete_gig(gig_id).await;
        let refreshed: Result<(), CoreError> = self.refresh_gigs().await;
        outcome?;
        refreshed
    }

    /// Constructs a local-only draft gig.
    ///
    /// Gent-role sessions seed the draft with the selected gent when no
    /// explicit prefill is given.
    #[must_use]
    pub fn make_draft(&self, prefill_gent_id: Option<i64>) -> Gig {
        Gig::draft(prefill_gent_id.or_else(|| self.session.acting_gent_id()))
    }

    /// Reloads or clears the availability view for the current selection.
    ///
    /// Availability is only held while the selected gig is in `Planning`;
    /// the rows remain meaningful server-side for other phases but the
    /// client does not load them. The loaded rows are also projected onto
    /// the selected gig's assigned set so the planning-phase invariant
    /// holds locally after every refresh.
    async fn sync_availability(&mut self) {
        let planning_gig: Option<i64> = self
            .session
            .selected_gig()
            .filter(|g| g.phase == Phase::Planning)
            .and_then(|g| g.id);

        match planning_gig {
            Some(gig_id) => {
                self.session.availability = self.load_availability(gig_id).await;
                if let Some(gig) = self.session.gigs.iter_mut().find(|g| g.id == Some(gig_id)) {
                    project_assignment(gig, &self.session.availability);
                }
            }
            None => self.session.availability.clear(),
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-memory stand-in for the companion server.
//!
//! `FakeGigService` reproduces the documented server behavior the
//! controller relies on: (date, title) is NOT pre-sorted (the client
//! sorts), availability reads cover every known gent with `no_reply`
//! defaults, set-availability enforces role rules and keeps the gig's
//! assigned set in sync, and deletes of missing gigs succeed.

use async_trait::async_trait;
use gigbook_client::{GigService, TransportError};
use gigbook_domain::{AvailabilityEntry, AvailabilityStatus, Gent, Gig, Phase, Role};
use std::sync::Mutex;
use time::Date;

/// A record of one service call, for asserting on controller behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListGents,
    ListGigs(Option<i64>),
    GetGig(i64),
    CreateGig,
    UpdateGig(i64, Gig),
    DeleteGig(i64),
    GetAvailability(i64),
    SetAvailability {
        gig_id: i64,
        gent_id: i64,
        status: AvailabilityStatus,
        acting_role: Role,
        acting_gent_id: Option<i64>,
    },
}

/// Per-operation failure switches.
#[derive(Debug, Default)]
pub struct Failures {
    pub list_gents: bool,
    pub list_gigs: bool,
    pub create_gig: bool,
    pub update_gig: bool,
    pub delete_gig: bool,
    pub get_availability: bool,
    pub set_availability: bool,
}

struct ServerState {
    gents: Vec<Gent>,
    gigs: Vec<Gig>,
    /// (gig_id, gent_id, status) rows.
    availability: Vec<(i64, i64, AvailabilityStatus)>,
    next_id: i64,
}

pub struct FakeGigService {
    state: Mutex<ServerState>,
    calls: Mutex<Vec<Call>>,
    pub failures: Mutex<Failures>,
}

impl FakeGigService {
    pub fn new(gents: Vec<Gent>, gigs: Vec<Gig>) -> Self {
        let next_id: i64 = gigs.iter().filter_map(|g| g.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(ServerState {
                gents,
                gigs,
                availability: Vec::new(),
                next_id,
            }),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(Failures::default()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    /// Seeds an availability row directly, bypassing permission checks.
    pub fn seed_availability(&self, gig_id: i64, gent_id: i64, status: AvailabilityStatus) {
        self.state
            .lock()
            .unwrap()
            .availability
            .push((gig_id, gent_id, status));
    }

    /// Removes a gig server-side without a client call, to simulate a
    /// concurrent actor.
    pub fn remove_gig(&self, gig_id: i64) {
        self.state
            .lock()
            .unwrap()
            .gigs
            .retain(|g| g.id != Some(gig_id));
    }

    pub fn server_gig(&self, gig_id: i64) -> Option<Gig> {
        self.state
            .lock()
            .unwrap()
            .gigs
            .iter()
            .find(|g| g.id == Some(gig_id))
            .cloned()
    }

    fn connection_refused() -> TransportError {
        TransportError::Connection {
            message: String::from("connection refused"),
        }
    }

    fn forbidden(detail: &str) -> TransportError {
        TransportError::UnexpectedStatus {
            status: 403,
            body: detail.to_string(),
        }
    }
}

#[async_trait]
impl GigService for FakeGigService {
    async fn list_gents(&self) -> Result<Vec<Gent>, TransportError> {
        self.record(Call::ListGents);
        if self.failures.lock().unwrap().list_gents {
            return Err(Self::connection_refused());
        }
        Ok(self.state.lock().unwrap().gents.clone())
    }

    async fn list_gigs(&self, filter_gent_id: Option<i64>) -> Result<Vec<Gig>, TransportError> {
        self.record(Call::ListGigs(filter_gent_id));
        if self.failures.lock().unwrap().list_gigs {
            return Err(Self::connection_refused());
        }
        let state = self.state.lock().unwrap();
        let gigs: Vec<Gig> = match filter_gent_id {
            None => state.gigs.clone(),
            // Gent view: all planning gigs, plus assigned booked/completed.
            Some(gent_id) => state
                .gigs
                .iter()
                .filter(|g| g.phase == Phase::Planning || g.gent_ids.contains(&gent_id))
                .cloned()
                .collect(),
        };
        Ok(gigs)
    }

    async fn get_gig(&self, id: i64) -> Result<Gig, TransportError> {
        self.record(Call::GetGig(id));
        self.state
            .lock()
            .unwrap()
            .gigs
            .iter()
            .find(|g| g.id == Some(id))
            .cloned()
            .ok_or(TransportError::UnexpectedStatus {
                status: 404,
                body: String::from("Gig not found"),
            })
    }

    async fn create_gig(&self, draft: &Gig) -> Result<Gig, TransportError> {
        self.record(Call::CreateGig);
        if self.failures.lock().unwrap().create_gig {
            return Err(Self::connection_refused());
        }
        let mut state = self.state.lock().unwrap();
        let mut created: Gig = draft.clone();
        created.id = Some(state.next_id);
        state.next_id += 1;
        state.gigs.push(created.clone());
        Ok(created)
    }

    async fn update_gig(&self, id: i64, gig: &Gig) -> Result<Gig, TransportError> {
        self.record(Call::UpdateGig(id, gig.clone()));
        if self.failures.lock().unwrap().update_gig {
            return Err(Self::connection_refused());
        }
        let mut state = self.state.lock().unwrap();
        let stored: &mut Gig = state
            .gigs
            .iter_mut()
            .find(|g| g.id == Some(id))
            .ok_or(TransportError::UnexpectedStatus {
                status: 404,
                body: String::from("Gig not found"),
            })?;
        stored.title = gig.title.clone();
        stored.date = gig.date;
        stored.fee = gig.fee;
        stored.notes = gig.notes.clone();
        stored.phase = gig.phase;
        stored.gent_ids = gig.gent_ids.clone();
        Ok(stored.clone())
    }

    async fn delete_gig(&self, id: i64) -> Result<(), TransportError> {
        self.record(Call::DeleteGig(id));
        if self.failures.lock().unwrap().delete_gig {
            return Err(Self::connection_refused());
        }
        // A missing gig is success: the HTTP client folds 404 into Ok.
        self.state.lock().unwrap().gigs.retain(|g| g.id != Some(id));
        Ok(())
    }

    async fn get_availability(
        &self,
        gig_id: i64,
    ) -> Result<Vec<AvailabilityEntry>, TransportError> {
        self.record(Call::GetAvailability(gig_id));
        if self.failures.lock().unwrap().get_availability {
            return Err(Self::connection_refused());
        }
        let state = self.state.lock().unwrap();
        // One entry per known gent, defaulting missing rows to NoReply.
        Ok(state
            .gents
            .iter()
            .map(|gent| AvailabilityEntry {
                gent_id: gent.id,
                status: state
                    .availability
                    .iter()
                    .find(|(gig, g, _)| *gig == gig_id && *g == gent.id)
                    .map_or(AvailabilityStatus::NoReply, |(_, _, s)| *s),
            })
            .collect())
    }

    async fn set_availability(
        &self,
        gig_id: i64,
        gent_id: i64,
        status: AvailabilityStatus,
        acting_role: Role,
        acting_gent_id: Option<i64>,
    ) -> Result<AvailabilityEntry, TransportError> {
        self.record(Call::SetAvailability {
            gig_id,
            gent_id,
            status,
            acting_role,
            acting_gent_id,
        });
        if self.failures.lock().unwrap().set_availability {
            return Err(Self::connection_refused());
        }

        // Server-side enforcement, mirrored from the companion backend.
        if acting_role == Role::Gent {
            if acting_gent_id != Some(gent_id) {
                return Err(Self::forbidden(
                    "Gents can only update their own availability",
                ));
            }
            if status == AvailabilityStatus::Assigned {
                return Err(Self::forbidden("Only managers can assign"));
            }
        }

        let mut state = self.state.lock().unwrap();
        if !state.gigs.iter().any(|g| g.id == Some(gig_id)) {
            return Err(TransportError::UnexpectedStatus {
                status: 404,
                body: String::from("Gig not found"),
            });
        }

        if let Some(row) = state
            .availability
            .iter_mut()
            .find(|(gig, g, _)| *gig == gig_id && *g == gent_id)
        {
            row.2 = status;
        } else {
            state.availability.push((gig_id, gent_id, status));
        }

        // Keep the assigned set in sync with 'assigned'.
        let gig: &mut Gig = state
            .gigs
            .iter_mut()
            .find(|g| g.id == Some(gig_id))
            .unwrap();
        let is_member: bool = gig.gent_ids.contains(&gent_id);
        if status == AvailabilityStatus::Assigned && !is_member {
            gig.gent_ids.push(gent_id);
        }
        if status != AvailabilityStatus::Assigned && is_member {
            gig.gent_ids.retain(|id| *id != gent_id);
        }

        Ok(AvailabilityEntry { gent_id, status })
    }
}

pub fn test_gent(id: i64, name: &str) -> Gent {
    Gent {
        id,
        name: name.to_string(),
        username: None,
    }
}

pub fn test_gig(id: i64, date: Date, title: &str, phase: Phase) -> Gig {
    Gig {
        id: Some(id),
        title: title.to_string(),
        date,
        fee: 500.0,
        notes: String::new(),
        phase,
        gent_ids: Vec::new(),
    }
}

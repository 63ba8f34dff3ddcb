// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transport seam between the state controller and the server.

use crate::error::TransportError;
use async_trait::async_trait;
use gigbook_domain::{AvailabilityEntry, AvailabilityStatus, Gent, Gig, Role};

/// One method per logical server operation.
///
/// Implementations are pure request/response shaping: no business rules
/// beyond translating unexpected statuses into typed failures. The state
/// controller is generic over this trait so tests can substitute an
/// in-memory server.
#[async_trait]
pub trait GigService: Send + Sync {
    /// Lists all known gents. `GET /gents`, expects 200.
    async fn list_gents(&self) -> Result<Vec<Gent>, TransportError>;

    /// Lists gigs, optionally server-filtered to one gent's view.
    /// `GET /gigs[?gent_id=]`, expects 200. Omitting the filter means
    /// "no filter".
    async fn list_gigs(&self, filter_gent_id: Option<i64>) -> Result<Vec<Gig>, TransportError>;

    /// Fetches a single gig. `GET /gigs/{id}`, expects 200.
    async fn get_gig(&self, id: i64) -> Result<Gig, TransportError>;

    /// Creates a gig from a draft. `POST /gigs`, expects 201; the
    /// returned gig carries the server-assigned id.
    async fn create_gig(&self, draft: &Gig) -> Result<Gig, TransportError>;

    /// Replaces a gig's full record. `PUT /gigs/{id}`, expects 200.
    async fn update_gig(&self, id: i64, gig: &Gig) -> Result<Gig, TransportError>;

    /// Deletes a gig. `DELETE /gigs/{id}?actor_role=manager`; 200, 204
    /// and 404 are all success (delete is idempotent from the caller's
    /// perspective), anything else is a failure carrying status and body.
    async fn delete_gig(&self, id: i64) -> Result<(), TransportError>;

    /// Fetches availability rows for a gig, one per known gent.
    /// `GET /gigs/{id}/availability`, expects 200.
    async fn get_availability(&self, gig_id: i64)
    -> Result<Vec<AvailabilityEntry>, TransportError>;

    /// Sets one gent's availability on a gig. `PUT
    /// /gigs/{id}/availability?actor_role=<role>[&actor_gent_id=<id>]`,
    /// expects 200. Authorization is server-enforced; the acting role
    /// and gent travel as query parameters.
    async fn set_availability(
        &self,
        gig_id: i64,
        gent_id: i64,
        status: AvailabilityStatus,
        acting_role: Role,
        acting_gent_id: Option<i64>,
    ) -> Result<AvailabilityEntry, TransportError>;
}

/// Delegating impl so shared services can be handed to a controller
/// while the caller keeps a handle.
#[async_trait]
impl<S: GigService + ?Sized> GigService for std::sync::Arc<S> {
    async fn list_gents(&self) -> Result<Vec<Gent>, TransportError> {
        (**self).list_gents().await
    }

    async fn list_gigs(&self, filter_gent_id: Option<i64>) -> Result<Vec<Gig>, TransportError> {
        (**self).list_gigs(filter_gent_id).await
    }

    async fn get_gig(&self, id: i64) -> Result<Gig, TransportError> {
        (**self).get_gig(id).await
    }

    async fn create_gig(&self, draft: &Gig) -> Result<Gig, TransportError> {
        (**self).create_gig(draft).await
    }

    async fn update_gig(&self, id: i64, gig: &Gig) -> Result<Gig, TransportError> {
        (**self).update_gig(id, gig).await
    }

    async fn delete_gig(&self, id: i64) -> Result<(), TransportError> {
        (**self).delete_gig(id).await
    }

    async fn get_availability(
        &self,
        gig_id: i64,
    ) -> Result<Vec<AvailabilityEntry>, TransportError> {
        (**self).get_availability(gig_id).await
    }

    async fn set_availability(
        &self,
        gig_id: i64,
        gent_id: i64,
        status: AvailabilityStatus,
        acting_role: Role,
        acting_gent_id: Option<i64>,
    ) -> Result<AvailabilityEntry, TransportError> {
        (**self)
            .set_availability(gig_id, gent_id, status, acting_role, acting_gent_id)
            .await
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! reqwest-backed implementation of [`GigService`].

use crate::dto::{AvailabilityUpdatePayload, GigPayload, GigRecord};
use crate::error::TransportError;
use crate::service::GigService;
use async_trait::async_trait;
use gigbook_domain::{AvailabilityEntry, AvailabilityStatus, Gent, Gig, Role};
use tracing::debug;

/// HTTP client for the gigbook companion server.
///
/// Holds a shared connection pool; cloning is cheap.
#[derive(Debug, Clone)]
pub struct HttpGigService {
    /// Server base URL without a trailing slash.
    base_url: String,
    /// Shared reqwest client.
    http: reqwest::Client,
}

impl HttpGigService {
    /// Creates a service against the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Returns whether a delete response status counts as success.
///
/// 404 is success: the record is already gone, which is what the caller
/// asked for.
pub(crate) const fn delete_status_ok(status: u16) -> bool {
    matches!(status, 200 | 204 | 404)
}

/// Consumes a response, failing unless it has the expected status.
///
/// On mismatch the body text is captured into the error where available.
async fn expect_status(
    response: reqwest::Response,
    expected: u16,
) -> Result<reqwest::Response, TransportError> {
    let status: u16 = response.status().as_u16();
    if status == expected {
        Ok(response)
    } else {
        let body: String = response.text().await.unwrap_or_default();
        Err(TransportError::UnexpectedStatus { status, body })
    }
}

#[async_trait]
impl GigService for HttpGigService {
    async fn list_gents(&self) -> Result<Vec<Gent>, TransportError> {
        let response = self.http.get(self.url("/gents")).send().await?;
        let gents: Vec<Gent> = expect_status(response, 200).await?.json().await?;
        debug!(count = gents.len(), "Fetched gents");
        Ok(gents)
    }

    async fn list_gigs(&self, filter_gent_id: Option<i64>) -> Result<Vec<Gig>, TransportError> {
        let mut request = self.http.get(self.url("/gigs"));
        if let Some(gent_id) = filter_gent_id {
            request = request.query(&[("gent_id", gent_id)]);
        }
        let response = request.send().await?;
        let records: Vec<GigRecord> = expect_status(response, 200).await?.json().await?;
        debug!(count = records.len(), ?filter_gent_id, "Fetched gigs");
        Ok(records.into_iter().map(Gig::from).collect())
    }

    async fn get_gig(&self, id: i64) -> Result<Gig, TransportError> {
        let response = self.http.get(self.url(&format!("/gigs/{id}"))).send().await?;
        let record: GigRecord = expect_status(response, 200).await?.json().await?;
        Ok(Gig::from(record))
    }

    async fn create_gig(&self, draft: &Gig) -> Result<Gig, TransportError> {
        let response = self
            .http
            .post(self.url("/gigs"))
            .json(&GigPayload::from_gig(draft))
            .send()
            .await?;
        let record: GigRecord = expect_status(response, 201).await?.json().await?;
        debug!(id = record.id, "Created gig");
        Ok(Gig::from(record))
    }

    async fn update_gig(&self, id: i64, gig: &Gig) -> Result<Gig, TransportError> {
        let response = self
            .http
            .put(self.url(&format!("/gigs/{id}")))
            .json(&GigPayload::from_gig(gig))
            .send()
            .await?;
        let record: GigRecord = expect_status(response, 200).await?.json().await?;
        debug!(id, "Updated gig");
        Ok(Gig::from(record))
    }

    async fn delete_gig(&self, id: i64) -> Result<(), TransportError> {
        let response = self
            .http
            .delete(self.url(&format!("/gigs/{id}")))
            .query(&[("actor_role", Role::Manager.as_str())])
            .send()
            .await?;
        let status: u16 = response.status().as_u16();
        if delete_status_ok(status) {
            debug!(id, status, "Deleted gig");
            Ok(())
        } else {
            let body: String = response.text().await.unwrap_or_default();
            Err(TransportError::UnexpectedStatus { status, body })
        }
    }

    async fn get_availability(
        &self,
        gig_id: i64,
    ) -> Result<Vec<AvailabilityEntry>, TransportError> {
        let response = self
            .http
            .get(self.url(&format!("/gigs/{gig_id}/availability")))
            .send()
            .await?;
        let entries: Vec<AvailabilityEntry> = expect_status(response, 200).await?.json().await?;
        Ok(entries)
    }

    async fn set_availability(
        &self,
        gig_id: i64,
        gent_id: i64,
        status: AvailabilityStatus,
        acting_role: Role,
        acting_gent_id: Option<i64>,
    ) -> Result<AvailabilityEntry, TransportError> {
        let mut query: Vec<(&str, String)> =
            vec![("actor_role", acting_role.as_str().to_string())];
        if let Some(id) = acting_gent_id {
            query.push(("actor_gent_id", id.to_string()));
        }
        let response = self
            .http
            .put(self.url(&format!("/gigs/{gig_id}/availability")))
            .query(&query)
            .json(&AvailabilityUpdatePayload { gent_id, status })
            .send()
            .await?;
        let entry: AvailabilityEntry = expect_status(response, 200).await?.json().await?;
        debug!(gig_id, gent_id, %status, "Set availability");
        Ok(entry)
    }
}

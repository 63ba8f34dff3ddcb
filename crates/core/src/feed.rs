// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Push-invalidation plumbing.
//!
//! The companion server publishes a `gigs_changed` notification over a
//! real-time channel. That channel is an external collaborator: whatever
//! transport delivers the notification publishes it into a [`ChangeFeed`],
//! and [`refresh_on_change`] maps each received event to one authoritative
//! refresh. Events are informational only and never carry state.

use crate::controller::SessionController;
use crate::error::CoreError;
use gigbook_client::GigService;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Maximum number of notifications to buffer. A session that cannot keep
/// up drops older notifications; a lagged receiver still refreshes, so
/// nothing is lost but redundant fetches.
const EVENT_BUFFER_SIZE: usize = 100;

/// A change notification from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// One or more gigs changed server-side; the list must be re-fetched.
    GigsChanged,
}

/// Broadcast fan-out for change notifications.
///
/// A lightweight wrapper around `tokio::sync::broadcast` so that one
/// notification source can invalidate any number of sessions.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    /// Creates a new feed.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Publishes a notification to all subscribed sessions.
    ///
    /// If nothing is subscribed the notification is silently dropped.
    pub fn notify(&self, event: ChangeEvent) {
        match self.tx.send(event) {
            Ok(count) => debug!(?event, receivers = count, "Published change notification"),
            Err(_) => debug!(?event, "No receivers for change notification"),
        }
    }

    /// Subscribes to the feed. Notifications published before the
    /// subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs refreshes against the controller until the feed closes.
///
/// Each received notification triggers one `refresh_gigs` call. A lagged
/// receiver (dropped notifications) also refreshes: missed events can
/// only mean more changes. Refresh failures are logged and do not end
/// the loop; the next notification retries.
pub async fn refresh_on_change<S: GigService>(
    controller: &mut SessionController<S>,
    receiver: &mut broadcast::Receiver<ChangeEvent>,
) {
    loop {
        match receiver.recv().await {
            Ok(ChangeEvent::GigsChanged) => {
                if let Err(err) = controller.refresh_gigs().await {
                    warn!(%err, "Refresh after change notification failed");
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                debug!(skipped, "Change feed lagged; refreshing once");
                let refreshed: Result<(), CoreError> = controller.refresh_gigs().await;
                if let Err(err) = refreshed {
                    warn!(%err, "Refresh after lagged feed failed");
                }
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

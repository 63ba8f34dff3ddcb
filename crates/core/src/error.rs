// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gigbook_client::TransportError;
use gigbook_domain::{DomainError, Role};

/// Errors surfaced by the session controller.
///
/// None of these are fatal to the process: the controller logs them,
/// abandons the optimistic transition, and waits for the user to
/// re-trigger the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The transport failed (connectivity, status, or decode).
    Transport(TransportError),
    /// A domain rule was violated.
    Domain(DomainError),
    /// The acting role is not permitted to perform the action.
    PermissionDenied {
        /// The role the session acts under.
        role: Role,
        /// The action that was attempted.
        action: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "Transport failure: {err}"),
            Self::Domain(err) => write!(f, "Domain violation: {err}"),
            Self::PermissionDenied { role, action } => {
                write!(f, "Permission denied: role '{role}' may not {action}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<TransportError> for CoreError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

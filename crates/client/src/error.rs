// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed transport failures.
//!
//! Three-way taxonomy: connectivity, unexpected HTTP status, and
//! response-decode failure. The state controller treats all three the
//! same way (log, abandon the optimistic transition, stay alive), but
//! callers that want to distinguish them can.

use thiserror::Error;

/// Errors raised by the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a status the operation does not expect.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code received.
        status: u16,
        /// The response body text, where available.
        body: String,
    },
    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
    /// The request could not be sent or the connection failed.
    #[error("Connection failure: {message}")]
    Connection {
        /// Description of the connectivity failure.
        message: String,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Connection {
                message: err.to_string(),
            }
        }
    }
}

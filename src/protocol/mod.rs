// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transports for communicating with a deCONZ gateway.
//!
//! # Transports
//!
//! - [`HttpClient`]: REST requests against `http://{host}:{port}/api/{key}/`
//! - [`EventStream`]: the websocket push channel (feature `websocket`)
//!
//! The [`Transport`] trait is the seam between the request plumbing and
//! the response interpretation in [`crate::response`]. It is a passthrough:
//! no retries, no caching, and non-2xx statuses are returned rather than
//! turned into errors.

mod http;
#[cfg(feature = "websocket")]
mod websocket;

pub use http::{GatewayConfig, HttpClient};
#[cfg(feature = "websocket")]
pub use websocket::EventStream;

use std::fmt;

use tokio_util::sync::CancellationToken;

use crate::error::ProtocolError;

/// HTTP methods used by the gateway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource or collection.
    Get,
    /// Modify a resource.
    Put,
    /// Create a resource.
    Post,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Put => Self::PUT,
            Method::Post => Self::POST,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl RawResponse {
    /// Creates a new raw response.
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues requests against the gateway's keyed API root.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request to `{api root}/{path}` and returns the raw response.
    ///
    /// `path` is appended verbatim; it is neither escaped nor validated.
    /// `body`, when present, is sent as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Cancelled` if `cancel` fires before the
    /// response is read, `ProtocolError::Timeout` if the configured timeout
    /// elapses, and `ProtocolError::Http` for other network failures.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
    }

    #[test]
    fn raw_response_success_range() {
        assert!(RawResponse::new(200, Vec::new()).is_success());
        assert!(RawResponse::new(204, Vec::new()).is_success());
        assert!(!RawResponse::new(403, b"[]".to_vec()).is_success());
    }
}

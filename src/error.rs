// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the deCONZ client.
//!
//! Failures fall into four groups: the transport could not complete the
//! request, the gateway answered with an error record, the gateway answered
//! with a result list that carries no outcome, or a body did not match the
//! expected shape.
//! None of them are retried or suppressed by the library.

use thiserror::Error;

pub use crate::response::GatewayError;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or its response could not be read.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The gateway rejected the request with an error record.
    ///
    /// Displays exactly as the record itself.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The gateway returned an empty result list, or an entry with neither
    /// success data nor an error record.
    #[error("malformed deconz response")]
    MalformedResponse,

    /// A response body or push message did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the gateway error record, if the gateway rejected the request.
    #[must_use]
    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            Self::Gateway(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if the request was abandoned because its cancellation
    /// token fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::Cancelled))
    }
}

/// Errors raised while talking to the gateway over HTTP or websocket.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Websocket connection or read failed.
    #[cfg(feature = "websocket")]
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The caller's cancellation token fired before the request completed.
    #[error("request cancelled")]
    Cancelled,

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors raised while decoding gateway responses and push messages.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A field is present but does not have the expected JSON type.
    #[error("field {field} has type {found}, expected {expected}")]
    TypeMismatch {
        /// The field that was inspected.
        field: String,
        /// The JSON type the caller needed.
        expected: &'static str,
        /// The JSON type the gateway sent.
        found: &'static str,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

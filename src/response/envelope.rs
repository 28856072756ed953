// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result list wire types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::Error;

/// An error record reported by the gateway.
///
/// The display form matches the gateway's own log format,
/// `"{address}: {type} ({description})"`.
///
/// # Examples
///
/// ```
/// use deconz_lib::GatewayError;
///
/// let err: GatewayError = serde_json::from_str(
///     r#"{"type": 3, "address": "/lights/9", "description": "resource, /lights/9, not available"}"#,
/// ).unwrap();
///
/// assert!(err.is_resource_unavailable());
/// assert_eq!(err.to_string(), "/lights/9: 3 (resource, /lights/9, not available)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{address}: {kind} ({description})")]
pub struct GatewayError {
    /// Numeric error type assigned by the gateway.
    #[serde(rename = "type", default)]
    pub kind: i32,
    /// Resource address the error refers to.
    #[serde(default)]
    pub address: String,
    /// Human readable description.
    #[serde(default)]
    pub description: String,
}

impl GatewayError {
    /// Error type for a missing or unknown API key.
    pub const UNAUTHORIZED: i32 = 1;
    /// Error type for a request body that is not valid JSON.
    pub const INVALID_JSON: i32 = 2;
    /// Error type for an address that does not exist.
    pub const RESOURCE_NOT_AVAILABLE: i32 = 3;
    /// Error type for an invalid attribute value.
    pub const INVALID_VALUE: i32 = 7;
    /// Error type returned when creating an API key while the gateway is locked.
    pub const LINK_BUTTON_NOT_PRESSED: i32 = 101;

    /// Returns `true` if the API key was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.kind == Self::UNAUTHORIZED
    }

    /// Returns `true` if the addressed resource does not exist.
    #[must_use]
    pub fn is_resource_unavailable(&self) -> bool {
        self.kind == Self::RESOURCE_NOT_AVAILABLE
    }

    /// Returns `true` if the gateway must be unlocked before a key can be created.
    #[must_use]
    pub fn is_link_button_not_pressed(&self) -> bool {
        self.kind == Self::LINK_BUTTON_NOT_PRESSED
    }
}

/// One element of a result list.
///
/// A well-formed entry carries either a non-empty `success` map or an
/// `error` record. A few endpoints (API key deletion) report success as a
/// plain message string instead of a map; that also counts as success.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseEntry {
    #[serde(default)]
    success: Option<Value>,
    #[serde(default)]
    error: Option<GatewayError>,
}

impl ResponseEntry {
    /// Returns the success map, if the gateway sent one.
    #[must_use]
    pub fn success(&self) -> Option<&Map<String, Value>> {
        self.success.as_ref().and_then(Value::as_object)
    }

    /// Returns the success message, for endpoints that answer with a string.
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.success.as_ref().and_then(Value::as_str)
    }

    /// Returns the error record, if the gateway sent one.
    #[must_use]
    pub fn error(&self) -> Option<&GatewayError> {
        self.error.as_ref()
    }

    /// Returns `true` if the entry carries at least one accepted attribute.
    ///
    /// Only a non-empty map or a non-empty message counts; any other shape
    /// is treated as missing success data.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match &self.success {
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::String(message)) => !message.is_empty(),
            _ => false,
        }
    }

    /// Converts a failed entry into the error the caller sees.
    ///
    /// An entry with neither success data nor an error record breaks the
    /// response contract and is reported as [`Error::MalformedResponse`].
    pub(crate) fn to_error(&self) -> Error {
        match &self.error {
            Some(err) => Error::Gateway(err.clone()),
            None => Error::MalformedResponse,
        }
    }
}

/// The gateway's result list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Vec<ResponseEntry>);

impl Envelope {
    /// Returns all entries in gateway order.
    #[must_use]
    pub fn entries(&self) -> &[ResponseEntry] {
        &self.0
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the gateway sent an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first entry, or [`Error::MalformedResponse`] for an empty list.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedResponse` if the list has no entries.
    pub fn first(&self) -> Result<&ResponseEntry, Error> {
        self.0.first().ok_or(Error::MalformedResponse)
    }

    /// Reduces the list to a single outcome.
    ///
    /// The first entry without success data decides the failure; entries
    /// after it are not consulted.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedResponse` for an empty list, or the error
    /// carried by the first failing entry.
    pub fn outcome(&self) -> Result<(), Error> {
        if self.0.is_empty() {
            return Err(Error::MalformedResponse);
        }

        match self.0.iter().find(|entry| !entry.is_success()) {
            Some(entry) => Err(entry.to_error()),
            None => Ok(()),
        }
    }

    /// Returns every error record in the list, in gateway order.
    ///
    /// [`Envelope::outcome`] only reports the first failure; callers that
    /// send multi-attribute writes can use this to inspect all of them.
    pub fn failures(&self) -> impl Iterator<Item = &GatewayError> {
        self.0
            .iter()
            .filter(|entry| !entry.is_success())
            .filter_map(ResponseEntry::error)
    }
}

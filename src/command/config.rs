// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway configuration requests.

use serde::Serialize;

/// Changes gateway configuration.
///
/// Values are forwarded as-is; the gateway is responsible for rejecting
/// invalid ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "rfconnected", skip_serializing_if = "Option::is_none")]
    pub rf_connected: Option<bool>,
    /// One of `stable`, `alpha`, `beta`.
    #[serde(rename = "updatechannel", skip_serializing_if = "Option::is_none")]
    pub update_channel: Option<String>,
    /// 0 closes the network, 255 opens it, 1..=254 opens it for that many
    /// seconds.
    #[serde(rename = "permitjoin", skip_serializing_if = "Option::is_none")]
    pub permit_join: Option<i32>,
    /// Delay between two group commands, in milliseconds.
    #[serde(rename = "groupdelay", skip_serializing_if = "Option::is_none")]
    pub group_delay: Option<i32>,
    #[serde(rename = "otauactive", skip_serializing_if = "Option::is_none")]
    pub otau_active: Option<bool>,
    #[serde(rename = "discovery", skip_serializing_if = "Option::is_none")]
    pub discovery_active: Option<bool>,
    /// Seconds the gateway stays unlocked for key creation (at most 600).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock: Option<i32>,
    /// One of 11, 15, 20 or 25.
    #[serde(rename = "zigbeechannel", skip_serializing_if = "Option::is_none")]
    pub zigbee_channel: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc: Option<String>,
    /// `12h` or `24h`.
    #[serde(rename = "timeformat", skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
}

/// Requests a new API key. Only accepted while the gateway is unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateApiKeyRequest {
    #[serde(rename = "devicetype")]
    pub application_name: String,
    /// Requested key; the gateway generates one when absent.
    #[serde(rename = "username", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl CreateApiKeyRequest {
    /// Creates a request for the named application.
    #[must_use]
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_request() {
        let req = CreateApiKeyRequest::new("my-app");
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"devicetype":"my-app"}"#
        );
    }

    #[test]
    fn invalid_channel_is_forwarded() {
        let req = SetConfigRequest {
            zigbee_channel: Some(99),
            ..SetConfigRequest::default()
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"zigbeechannel":99}"#
        );
    }
}

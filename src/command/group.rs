// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group requests.

use serde::Serialize;

use super::SetLightStateRequest;

/// Creates a group with the given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

impl CreateGroupRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Changes group membership and metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetGroupConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "lights", skip_serializing_if = "Option::is_none")]
    pub light_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(rename = "lightsequence", skip_serializing_if = "Option::is_none")]
    pub light_id_sequence: Option<Vec<String>>,
    #[serde(rename = "multideviceids", skip_serializing_if = "Option::is_none")]
    pub multi_device_ids: Option<Vec<String>>,
}

/// Applies a light state to every light of a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetGroupStateRequest {
    #[serde(flatten)]
    pub state: SetLightStateRequest,
    /// Flips every light; takes precedence over `state.on`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<bool>,
}

impl SetGroupStateRequest {
    /// Creates a request that toggles the group.
    #[must_use]
    pub fn toggle() -> Self {
        Self {
            state: SetLightStateRequest::default(),
            toggle: Some(true),
        }
    }
}

impl From<SetLightStateRequest> for SetGroupStateRequest {
    fn from(state: SetLightStateRequest) -> Self {
        Self {
            state,
            toggle: None,
        }
    }
}

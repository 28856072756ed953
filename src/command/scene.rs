// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene requests.

use serde::Serialize;

/// Creates a scene in a group from the current state of its lights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSceneRequest {
    pub name: String,
}

impl CreateSceneRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Changes scene metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetSceneConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Changes the stored state of one light in a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetSceneLightStateRequest {
    #[serde(rename = "on", skip_serializing_if = "Option::is_none")]
    pub is_on: Option<bool>,
    #[serde(rename = "bri", skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i32>,
    #[serde(rename = "transitiontime", skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xy: Option<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_state_fields() {
        let req = SetSceneLightStateRequest {
            is_on: Some(true),
            brightness: Some(80),
            ..SetSceneLightStateRequest::default()
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"on":true,"bri":80}"#
        );
    }
}

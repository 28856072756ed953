// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene resource.

use serde::{Deserialize, Serialize};

/// A scene stored in a group, as returned by
/// `GET /groups/{group}/scenes/{scene}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    #[serde(skip)]
    pub id: String,
    pub lights: Vec<SceneLight>,
    pub name: String,
}

/// The stored state of one light within a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLight {
    pub id: String,
    #[serde(rename = "on")]
    pub is_on: bool,
    #[serde(rename = "bri")]
    pub brightness: i32,
    #[serde(rename = "transitiontime")]
    pub transition_time: i32,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "ct", skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<i32>,
    #[serde(rename = "sat", skip_serializing_if = "Option::is_none")]
    pub saturation: Option<i32>,
}

/// Entry of `GET /groups/{group}/scenes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSummary {
    #[serde(skip)]
    pub id: String,
    #[serde(rename = "lights")]
    pub light_ids: Vec<String>,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_with_lights() {
        let json = r#"{
            "lights": [
                {"bri": 111, "id": "1", "on": true, "transitiontime": 0, "x": 27499, "y": 26060},
                {"bri": 222, "id": "2", "on": false, "transitiontime": 10, "x": 0, "y": 0, "ct": 300}
            ],
            "name": "working"
        }"#;

        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.name, "working");
        assert_eq!(scene.lights.len(), 2);
        assert!(scene.lights[0].is_on);
        assert_eq!(scene.lights[1].color_temperature, Some(300));
    }
}

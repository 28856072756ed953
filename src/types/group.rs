// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group resource.

use serde::{Deserialize, Serialize};

/// A collection of lights; the foundation for scenes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    /// The last action sent to the group.
    #[serde(rename = "action")]
    pub last_action: GroupAction,
    #[serde(rename = "devicemembership")]
    pub device_ids: Vec<String>,
    pub etag: String,
    pub hidden: bool,
    pub id: String,
    /// Gateway-sorted ids of every light in the group.
    #[serde(rename = "lights")]
    pub light_ids: Vec<String>,
    /// User-sorted subset of `light_ids`.
    #[serde(rename = "lightsequence")]
    pub light_id_sequence: Vec<String>,
    /// Subsequent ids of multi-device lights.
    #[serde(rename = "multideviceids")]
    pub multi_device_ids: Vec<String>,
    pub name: String,
    pub scenes: Vec<GroupScene>,
    pub state: GroupState,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Scene reference embedded in a [`Group`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupScene {
    pub id: String,
    pub name: String,
    #[serde(rename = "transitiontime")]
    pub transition_time: i32,
    #[serde(rename = "lightcount")]
    pub light_count: i32,
}

/// Aggregate on/off state of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_on: Option<bool>,
}

/// A state change applied to every light of a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(rename = "bri", skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<i32>,
    #[serde(rename = "sat", skip_serializing_if = "Option::is_none")]
    pub saturation: Option<i32>,
    #[serde(rename = "ct", skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xy: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(rename = "colormode", skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_full() {
        let json = r#"{
            "action": {"bri": 127, "colormode": "hs", "ct": 0, "effect": "none", "hue": 0, "on": false, "sat": 127, "xy": [0, 0]},
            "devicemembership": [],
            "etag": "ab5272cfe11339202929259af22252ae",
            "hidden": false,
            "id": "1",
            "lights": ["1", "2", "3"],
            "lightsequence": ["3", "1", "2"],
            "multideviceids": [],
            "name": "Living room",
            "scenes": [{"id": "1", "name": "warmlight", "transitiontime": 10, "lightcount": 3}],
            "state": {"all_on": false, "any_on": true},
            "type": "LightGroup"
        }"#;

        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.id, "1");
        assert_eq!(group.light_ids, vec!["1", "2", "3"]);
        assert_eq!(group.light_id_sequence[0], "3");
        assert_eq!(group.last_action.on, Some(false));
        assert_eq!(group.scenes[0].light_count, 3);
        assert_eq!(group.state.any_on, Some(true));
        assert_eq!(group.kind, "LightGroup");
    }

    #[test]
    fn group_state_delta() {
        let state: GroupState = serde_json::from_str(r#"{"any_on": true}"#).unwrap();
        assert_eq!(state.any_on, Some(true));
        assert!(state.all_on.is_none());
    }
}

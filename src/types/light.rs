// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light resource.

use serde::{Deserialize, Serialize};

/// A light as reported by `GET /lights/{id}`.
///
/// # Examples
///
/// ```
/// use deconz_lib::types::Light;
///
/// let json = r#"{
///     "name": "Kitchen",
///     "type": "Extended color light",
///     "uniqueid": "00:17:88:01:00:bd:c7:b9-0b",
///     "state": {"on": true, "bri": 144, "reachable": true}
/// }"#;
/// let light: Light = serde_json::from_str(json).unwrap();
///
/// assert_eq!(light.name, "Kitchen");
/// assert_eq!(light.state.brightness, Some(144));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    /// Gateway identifier. Usable in paths but may change across re-pairing;
    /// use `unique_id` to deduplicate.
    #[serde(skip)]
    pub id: String,
    /// Warmest supported color temperature in mireds.
    #[serde(rename = "ctmax", skip_serializing_if = "Option::is_none")]
    pub ct_max: Option<i32>,
    /// Coolest supported color temperature in mireds.
    #[serde(rename = "ctmin", skip_serializing_if = "Option::is_none")]
    pub ct_min: Option<i32>,
    #[serde(rename = "lastannounced")]
    pub last_announced: Option<String>,
    #[serde(rename = "lastseen")]
    pub last_seen: Option<String>,
    pub etag: String,
    #[serde(rename = "manufacturername")]
    pub manufacturer: String,
    pub name: String,
    #[serde(rename = "modelid")]
    pub model_id: String,
    #[serde(rename = "swversion")]
    pub software_version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub state: LightState,
    #[serde(rename = "uniqueid")]
    pub unique_id: String,
}

/// The controllable state of a light.
///
/// Every attribute is optional: a `changed` push message only carries the
/// attributes that moved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(rename = "bri", skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<i32>,
    #[serde(rename = "sat", skip_serializing_if = "Option::is_none")]
    pub saturation: Option<i32>,
    /// Color temperature in mireds.
    #[serde(rename = "ct", skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<i32>,
    /// CIE xy color coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xy: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    #[serde(rename = "colormode", skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachable: Option<bool>,
}

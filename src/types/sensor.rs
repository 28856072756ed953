// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor resource.

use serde::{Deserialize, Serialize};

/// A sensor in the Zigbee network.
///
/// # Examples
///
/// ```
/// use deconz_lib::types::Sensor;
///
/// let json = r#"{"name": "Door", "type": "ZHAOpenClose", "state": {"open": true}}"#;
/// let sensor: Sensor = serde_json::from_str(json).unwrap();
///
/// assert_eq!(sensor.kind, "ZHAOpenClose");
/// assert_eq!(sensor.state.open, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensor {
    #[serde(skip)]
    pub id: String,
    /// Zigbee endpoint of the sensor cluster.
    #[serde(rename = "ep", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<i32>,
    pub config: SensorConfig,
    pub etag: String,
    #[serde(rename = "manufacturername")]
    pub manufacturer: String,
    #[serde(rename = "modelid")]
    pub model_id: String,
    pub mode: Option<i32>,
    pub name: String,
    pub state: SensorState,
    #[serde(rename = "swversion")]
    pub software_version: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "uniqueid")]
    pub unique_id: String,
}

/// The settable properties of a sensor.
///
/// Also used as the body of `PUT /sensors/{id}/config`, so unset fields are
/// left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachable: Option<bool>,
    #[serde(rename = "battery", skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<i32>,
}

/// Reported readings of a sensor.
///
/// One shape covers every sensor type; each device only reports the
/// attributes relevant to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SensorState {
    #[serde(rename = "lastupdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(rename = "lowbattery", skip_serializing_if = "Option::is_none")]
    pub low_battery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tampered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm: Option<bool>,
    #[serde(rename = "carbonmonoxide", skip_serializing_if = "Option::is_none")]
    pub carbon_monoxide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fire: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lux: Option<i64>,
    #[serde(rename = "lightlevel", skip_serializing_if = "Option::is_none")]
    pub light_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daylight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<bool>,
    #[serde(rename = "buttonevent", skip_serializing_if = "Option::is_none")]
    pub button_event: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gesture: Option<i64>,
    #[serde(rename = "eventduration", skip_serializing_if = "Option::is_none")]
    pub event_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<i64>,
    /// Hundredths of a degree Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valve: Option<i64>,
    #[serde(rename = "windowopen", skip_serializing_if = "Option::is_none")]
    pub window_open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibration: Option<bool>,
    #[serde(rename = "orientation_x", skip_serializing_if = "Option::is_none")]
    pub orientation_x: Option<i64>,
    #[serde(rename = "orientation_y", skip_serializing_if = "Option::is_none")]
    pub orientation_y: Option<i64>,
    #[serde(rename = "orientation_z", skip_serializing_if = "Option::is_none")]
    pub orientation_z: Option<i64>,
    #[serde(rename = "tiltangle", skip_serializing_if = "Option::is_none")]
    pub tilt_angle: Option<i64>,
    #[serde(rename = "vibrationstrength", skip_serializing_if = "Option::is_none")]
    pub vibration_strength: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<bool>,
}

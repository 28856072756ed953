// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway configuration resource.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Group, Light, Rule, Schedule, Sensor};

/// Current configuration of the gateway, from `GET /config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayState {
    #[serde(rename = "apiversion")]
    pub api_version: String,
    #[serde(rename = "swversion")]
    pub software_version: String,
    #[serde(rename = "swupdate")]
    pub software_update: SoftwareUpdateState,

    #[serde(rename = "mac")]
    pub mac_address: String,
    #[serde(rename = "zigbeechannel")]
    pub zigbee_channel: i32,
    #[serde(rename = "panid")]
    pub zigbee_pan_id: i32,
    #[serde(rename = "uuid")]
    pub gateway_id: String,

    #[serde(rename = "websocketnotifyall")]
    pub websocket_notify_all: bool,
    /// Port of the push channel.
    #[serde(rename = "websocketport")]
    pub websocket_port: i32,
    #[serde(rename = "linkbutton")]
    pub link_button_pressed: bool,

    pub name: String,
    #[serde(rename = "localtime")]
    pub local_time: String,
    #[serde(rename = "utc")]
    pub utc_time: String,
    #[serde(rename = "timeformat")]
    pub time_format: String,
    pub timezone: String,

    #[serde(rename = "dhcp")]
    pub using_dhcp: bool,
    #[serde(rename = "gateway")]
    pub gateway_ip: String,
    #[serde(rename = "ipaddress")]
    pub ip: String,
    pub netmask: String,
}

/// Software update profile of the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareUpdateState {
    pub notify: bool,
    pub text: String,
    #[serde(rename = "updatestate")]
    pub update_state: i32,
    pub url: String,
}

/// The whole datastore, from `GET /api/{key}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullState {
    pub config: GatewayState,
    pub groups: BTreeMap<String, Group>,
    pub lights: BTreeMap<String, Light>,
    pub rules: BTreeMap<String, Rule>,
    pub schedules: BTreeMap<String, Schedule>,
    pub sensors: BTreeMap<String, Sensor>,
}

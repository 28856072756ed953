// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scheduled command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(skip)]
    pub id: String,
    #[serde(rename = "autodelete")]
    pub auto_delete: bool,
    pub command: ScheduleCommand,
    pub description: String,
    pub etag: String,
    pub name: String,
    /// `"enabled"` or `"disabled"`.
    pub status: String,
    /// When the command fires. One of:
    ///
    /// - an absolute time, `yyyy-MM-ddThh:mm:ss`
    /// - a weekly recurrence, `W[0..127]/Thh:mm:ss`, where the number is a
    ///   `0MTWTFSS` bitmask (124 is every weekday, 3 the weekend)
    /// - a timer, `PThh:mm:ss`
    /// - a recurring timer, `R[0..99]/PThh:mm:ss` (no count means forever)
    pub time: String,
}

/// The request a schedule issues when it fires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleCommand {
    pub address: String,
    /// Always `"PUT"` on current firmware.
    pub method: String,
    pub body: Value,
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule requests.

use serde::Serialize;

use crate::types::ScheduleCommand;

/// Creates a schedule. See [`Schedule::time`](crate::types::Schedule::time)
/// for the accepted time formats.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateScheduleRequest {
    pub name: String,
    pub description: String,
    pub command: ScheduleCommand,
    /// `"enabled"` or `"disabled"`.
    pub status: String,
    #[serde(rename = "autodelete")]
    pub auto_delete: bool,
    pub time: String,
}

/// Changes an existing schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetScheduleConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<ScheduleCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "autodelete", skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

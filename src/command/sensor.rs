// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor requests.

use serde::Serialize;

use crate::types::SensorConfig;

/// Body of `PUT sensors/{id}/config`; same shape as the reported config.
pub type SetSensorConfigRequest = SensorConfig;

/// Renames a sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetSensorNameRequest {
    pub name: String,
}

impl SetSensorNameRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

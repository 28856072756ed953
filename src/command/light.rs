// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light requests.

use serde::Serialize;

/// Changes what a light is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetLightStateRequest {
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
    pub xy: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    /// `"none"` or `"colorloop"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    /// Speed of the `colorloop` effect, 1 (fast) to 255 (slow). Ignored for
    /// other effects.
    #[serde(rename = "colorloopspeed", skip_serializing_if = "Option::is_none")]
    pub color_loop_speed: Option<i32>,
    /// Transition duration in tenths of a second.
    #[serde(rename = "transitiontime", skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<i32>,
}

impl SetLightStateRequest {
    /// Creates a request that switches the light on.
    #[must_use]
    pub fn on() -> Self {
        Self {
            on: Some(true),
            ..Self::default()
        }
    }

    /// Creates a request that switches the light off.
    #[must_use]
    pub fn off() -> Self {
        Self {
            on: Some(false),
            ..Self::default()
        }
    }

    /// Sets the brightness.
    #[must_use]
    pub fn with_brightness(mut self, brightness: i32) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets hue and saturation.
    #[must_use]
    pub fn with_hue_saturation(mut self, hue: i32, saturation: i32) -> Self {
        self.hue = Some(hue);
        self.saturation = Some(saturation);
        self
    }

    /// Sets the color temperature in mireds.
    #[must_use]
    pub fn with_color_temperature(mut self, ct: i32) -> Self {
        self.color_temperature = Some(ct);
        self
    }

    /// Sets the CIE xy color.
    #[must_use]
    pub fn with_xy(mut self, x: f64, y: f64) -> Self {
        self.xy = Some([x, y]);
        self
    }

    /// Sets the transition time in tenths of a second.
    #[must_use]
    pub fn with_transition_time(mut self, tenths: i32) -> Self {
        self.transition_time = Some(tenths);
        self
    }
}

/// Changes light metadata without affecting its output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetLightConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

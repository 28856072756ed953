// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request bodies for gateway mutations.
//!
//! Each type serializes to the JSON object expected by one `PUT` or `POST`
//! endpoint. Unset optional attributes are omitted from the body so the
//! gateway leaves them untouched.
//!
//! | Request | Endpoint |
//! |---------|----------|
//! | [`SetLightStateRequest`] | `PUT lights/{id}/state` |
//! | [`SetLightConfigRequest`] | `PUT lights/{id}` |
//! | [`CreateGroupRequest`] | `POST groups` |
//! | [`SetGroupConfigRequest`] | `PUT groups/{id}` |
//! | [`SetGroupStateRequest`] | `PUT groups/{id}/action` |
//! | [`CreateSceneRequest`] | `POST groups/{id}/scenes` |
//! | [`SetSceneConfigRequest`] | `PUT groups/{id}/scenes/{id}` |
//! | [`SetSceneLightStateRequest`] | `PUT groups/{id}/scenes/{id}/lights/{id}/state` |
//! | [`SetSensorConfigRequest`] | `PUT sensors/{id}/config` |
//! | [`SetSensorNameRequest`] | `PUT sensors/{id}` |
//! | [`CreateRuleRequest`] / [`SetRuleRequest`] | `POST rules` / `PUT rules/{id}` |
//! | [`CreateScheduleRequest`] / [`SetScheduleConfigRequest`] | `POST schedules` / `PUT schedules/{id}` |
//! | [`SetConfigRequest`] | `PUT config` |
//! | [`CreateApiKeyRequest`] | `POST /api` |
//!
//! # Examples
//!
//! ```
//! use deconz_lib::command::SetLightStateRequest;
//!
//! let req = SetLightStateRequest::on().with_brightness(200).with_transition_time(10);
//! assert_eq!(
//!     serde_json::to_string(&req).unwrap(),
//!     r#"{"on":true,"bri":200,"transitiontime":10}"#
//! );
//! ```

mod config;
mod group;
mod light;
mod rule;
mod scene;
mod schedule;
mod sensor;

pub use config::{CreateApiKeyRequest, SetConfigRequest};
pub use group::{CreateGroupRequest, SetGroupConfigRequest, SetGroupStateRequest};
pub use light::{SetLightConfigRequest, SetLightStateRequest};
pub use rule::{CreateRuleRequest, SetRuleRequest};
pub use scene::{CreateSceneRequest, SetSceneConfigRequest, SetSceneLightStateRequest};
pub use schedule::{CreateScheduleRequest, SetScheduleConfigRequest};
pub use sensor::{SetSensorConfigRequest, SetSensorNameRequest};

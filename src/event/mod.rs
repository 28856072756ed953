// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Push channel notifications.
//!
//! The gateway pushes one JSON object per resource change over its
//! websocket. A message is decoded in two stages: first the common metadata
//! (`t`, `e`, `r`, `id`, `uniqueid`, ...), then at most one payload whose
//! shape depends on the resource/event pair:
//!
//! | resource | event | payload |
//! |----------|-------|---------|
//! | `sensors` | `changed` | [`SensorState`](crate::types::SensorState) |
//! | `sensors` | `added` | [`Sensor`](crate::types::Sensor) |
//! | `lights` | `changed` | [`LightState`](crate::types::LightState) |
//! | `lights` | `added` | [`Light`](crate::types::Light) |
//! | `groups` | `changed` | [`GroupState`](crate::types::GroupState) |
//! | `groups` | `added` | [`Group`](crate::types::Group) |
//!
//! Any other pair decodes successfully with metadata only, so new event
//! kinds added by the gateway do not break consumers.
//!
//! # Examples
//!
//! ```
//! use deconz_lib::event::{decode_event, EventKind, ResourceKind};
//!
//! let event = decode_event(
//!     br#"{"t":"event","e":"changed","r":"lights","id":"3","state":{"on":true,"bri":120}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(event.event(), &EventKind::Changed);
//! assert_eq!(event.resource(), &ResourceKind::Lights);
//! assert_eq!(event.light_state().unwrap().brightness, Some(120));
//! ```

mod decoder;
mod update;

pub use decoder::decode_event;
pub use update::{EventKind, EventPayload, ResourceKind, UpdateEvent};

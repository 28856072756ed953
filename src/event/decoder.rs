// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two-stage decoding of push messages.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{EventKind, EventPayload, ResourceKind, UpdateEvent};
use crate::error::{Error, ParseError};
use crate::types::{Group, GroupState, Light, LightState, Sensor, SensorState};

/// Metadata stage: fixed fields plus the payload slots, still undecoded.
#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(rename = "t", default)]
    kind: Option<String>,
    #[serde(rename = "e")]
    event: EventKind,
    #[serde(rename = "r")]
    resource: ResourceKind,
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "uniqueid", default)]
    unique_id: Option<String>,
    #[serde(rename = "gid", default)]
    group_id: Option<String>,
    #[serde(rename = "scid", default)]
    scene_id: Option<String>,
    #[serde(default)]
    config: Option<Value>,
    #[serde(default)]
    state: Option<Value>,
    #[serde(default)]
    group: Option<Value>,
    #[serde(default)]
    light: Option<Value>,
    #[serde(default)]
    sensor: Option<Value>,
}

/// Which raw slot a route reads its payload from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    State,
    Group,
    Light,
    Sensor,
}

impl RawMessage {
    fn slot(&self, slot: Slot) -> Option<&Value> {
        match slot {
            Slot::State => self.state.as_ref(),
            Slot::Group => self.group.as_ref(),
            Slot::Light => self.light.as_ref(),
            Slot::Sensor => self.sensor.as_ref(),
        }
    }
}

type PayloadDecoder = fn(&Value) -> Result<EventPayload, serde_json::Error>;

struct Route {
    resource: &'static str,
    event: &'static str,
    slot: Slot,
    decode: PayloadDecoder,
}

fn decode_as<T>(raw: &Value) -> Result<EventPayload, serde_json::Error>
where
    T: DeserializeOwned + Into<EventPayload>,
{
    T::deserialize(raw).map(Into::into)
}

/// Payload stage dispatch table. Pairs not listed carry no payload.
const ROUTES: &[Route] = &[
    Route {
        resource: "sensors",
        event: "changed",
        slot: Slot::State,
        decode: decode_as::<SensorState>,
    },
    Route {
        resource: "sensors",
        event: "added",
        slot: Slot::Sensor,
        decode: decode_as::<Sensor>,
    },
    Route {
        resource: "lights",
        event: "changed",
        slot: Slot::State,
        decode: decode_as::<LightState>,
    },
    Route {
        resource: "lights",
        event: "added",
        slot: Slot::Light,
        decode: decode_as::<Light>,
    },
    Route {
        resource: "groups",
        event: "changed",
        slot: Slot::State,
        decode: decode_as::<GroupState>,
    },
    Route {
        resource: "groups",
        event: "added",
        slot: Slot::Group,
        decode: decode_as::<Group>,
    },
];

fn route_for(resource: &ResourceKind, event: &EventKind) -> Option<&'static Route> {
    ROUTES
        .iter()
        .find(|route| route.resource == resource.as_str() && route.event == event.as_str())
}

/// Decodes one push message into an [`UpdateEvent`].
///
/// Decoding is stateless; each message is handled on its own.
///
/// # Errors
///
/// Returns `ParseError::Json` if the message is not a JSON object, if the
/// `e` or `r` field is missing, or if the payload slot selected by the
/// resource/event pair is present but does not match its target shape.
///
/// # Examples
///
/// ```
/// use deconz_lib::event::decode_event;
///
/// let event = decode_event(br#"{"e":"deleted","r":"lights","id":"3"}"#).unwrap();
/// assert_eq!(event.resource_id(), Some("3"));
/// assert!(event.payload().is_none());
/// ```
pub fn decode_event(message: &[u8]) -> Result<UpdateEvent, Error> {
    let raw: RawMessage = serde_json::from_slice(message).map_err(ParseError::Json)?;

    let payload = match route_for(&raw.resource, &raw.event) {
        Some(route) => match raw.slot(route.slot) {
            Some(value) => Some((route.decode)(value).map_err(ParseError::Json)?),
            None => None,
        },
        None => {
            tracing::trace!(
                event = %raw.event,
                resource = %raw.resource,
                "No payload route for push message"
            );
            None
        }
    };

    tracing::debug!(
        event = %raw.event,
        resource = %raw.resource,
        id = ?raw.id,
        has_payload = payload.is_some(),
        "Decoded push message"
    );

    Ok(UpdateEvent {
        kind: raw.kind,
        event: raw.event,
        resource: raw.resource,
        resource_id: raw.id,
        unique_id: raw.unique_id,
        group_id: raw.group_id,
        scene_id: raw.scene_id,
        config: raw.config,
        payload,
    })
}

impl std::str::FromStr for UpdateEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_event(s.as_bytes())
    }
}

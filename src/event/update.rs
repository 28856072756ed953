// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded push notification types.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Group, GroupState, Light, LightState, Sensor, SensorState};

/// What happened to the resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum EventKind {
    /// Attributes of an existing resource changed.
    Changed,
    /// A resource was created.
    Added,
    /// A resource was removed.
    Deleted,
    /// A scene was recalled.
    SceneCalled,
    /// Any event the client does not know about.
    Other(String),
}

impl EventKind {
    /// Returns the wire name of the event.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Changed => "changed",
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::SceneCalled => "scene-called",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "changed" => Self::Changed,
            "added" => Self::Added,
            "deleted" => Self::Deleted,
            "scene-called" => Self::SceneCalled,
            _ => Self::Other(s),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which kind of resource the event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ResourceKind {
    /// The `lights` collection.
    Lights,
    /// The `groups` collection.
    Groups,
    /// The `sensors` collection.
    Sensors,
    /// Scenes, reported for scene recalls.
    Scenes,
    /// Any resource the client does not know about.
    Other(String),
}

impl ResourceKind {
    /// Returns the wire name of the resource collection.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lights => "lights",
            Self::Groups => "groups",
            Self::Sensors => "sensors",
            Self::Scenes => "scenes",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ResourceKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "lights" => Self::Lights,
            "groups" => Self::Groups,
            "sensors" => Self::Sensors,
            "scenes" => Self::Scenes,
            _ => Self::Other(s),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The typed payload of a push notification.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// Changed attributes of a light.
    LightState(LightState),
    /// A newly added light.
    Light(Light),
    /// Changed aggregate state of a group.
    GroupState(GroupState),
    /// A newly added group.
    Group(Group),
    /// Changed readings of a sensor.
    SensorState(SensorState),
    /// A newly added sensor.
    Sensor(Sensor),
}

macro_rules! payload_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for EventPayload {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

payload_from!(LightState, Light, GroupState, Group, SensorState, Sensor);

/// A decoded push notification.
///
/// Carries the message metadata and at most one typed payload. Built by
/// [`decode_event`](super::decode_event); immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEvent {
    pub(super) kind: Option<String>,
    pub(super) event: EventKind,
    pub(super) resource: ResourceKind,
    pub(super) resource_id: Option<String>,
    pub(super) unique_id: Option<String>,
    pub(super) group_id: Option<String>,
    pub(super) scene_id: Option<String>,
    pub(super) config: Option<Value>,
    pub(super) payload: Option<EventPayload>,
}

impl UpdateEvent {
    /// Returns the message type (`t`), usually `"event"`.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Returns what happened.
    #[must_use]
    pub fn event(&self) -> &EventKind {
        &self.event
    }

    /// Returns the kind of resource affected.
    #[must_use]
    pub fn resource(&self) -> &ResourceKind {
        &self.resource
    }

    /// Returns the gateway identifier of the resource.
    #[must_use]
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    /// Returns the device unique identifier (lights and sensors only).
    #[must_use]
    pub fn unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    /// Returns the group id carried by scene events.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Returns the scene id carried by scene events.
    #[must_use]
    pub fn scene_id(&self) -> Option<&str> {
        self.scene_id.as_deref()
    }

    /// Returns the undecoded `config` object, if the message carried one.
    #[must_use]
    pub fn raw_config(&self) -> Option<&Value> {
        self.config.as_ref()
    }

    /// Returns the typed payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&EventPayload> {
        self.payload.as_ref()
    }

    /// Consumes the event and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> Option<EventPayload> {
        self.payload
    }

    /// Returns the changed light attributes of a `changed` light event.
    #[must_use]
    pub fn light_state(&self) -> Option<&LightState> {
        match &self.payload {
            Some(EventPayload::LightState(state)) => Some(state),
            _ => None,
        }
    }

    /// Returns the new light of an `added` light event.
    #[must_use]
    pub fn light(&self) -> Option<&Light> {
        match &self.payload {
            Some(EventPayload::Light(light)) => Some(light),
            _ => None,
        }
    }

    /// Returns the changed group state of a `changed` group event.
    #[must_use]
    pub fn group_state(&self) -> Option<&GroupState> {
        match &self.payload {
            Some(EventPayload::GroupState(state)) => Some(state),
            _ => None,
        }
    }

    /// Returns the new group of an `added` group event.
    #[must_use]
    pub fn group(&self) -> Option<&Group> {
        match &self.payload {
            Some(EventPayload::Group(group)) => Some(group),
            _ => None,
        }
    }

    /// Returns the changed readings of a `changed` sensor event.
    #[must_use]
    pub fn sensor_state(&self) -> Option<&SensorState> {
        match &self.payload {
            Some(EventPayload::SensorState(state)) => Some(state),
            _ => None,
        }
    }

    /// Returns the new sensor of an `added` sensor event.
    #[must_use]
    pub fn sensor(&self) -> Option<&Sensor> {
        match &self.payload {
            Some(EventPayload::Sensor(sensor)) => Some(sensor),
            _ => None,
        }
    }
}

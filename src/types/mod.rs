// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resource types of the deCONZ data model.
//!
//! These are plain attribute bags bound to the gateway's lowercase wire
//! names. No range checks are applied: whatever the gateway reports is
//! passed through unchanged.
//!
//! State types (`LightState`, `GroupState`, `SensorState`) use `Option`
//! fields because the push channel only carries the attributes that changed.
//!
//! Gateway identifiers are not part of most resource bodies; they are the
//! keys of collection responses. The client copies them into the `id`
//! field of each value for convenience.

mod gateway;
mod group;
mod light;
mod rule;
mod scene;
mod schedule;
mod sensor;

use std::collections::BTreeMap;

pub use gateway::{FullState, GatewayState, SoftwareUpdateState};
pub use group::{Group, GroupAction, GroupScene, GroupState};
pub use light::{Light, LightState};
pub use rule::{Rule, RuleAction, RuleCondition};
pub use scene::{Scene, SceneLight, SceneSummary};
pub use schedule::{Schedule, ScheduleCommand};
pub use sensor::{Sensor, SensorConfig, SensorState};

/// A resource whose gateway identifier travels outside its body.
pub(crate) trait Keyed {
    fn set_id(&mut self, id: &str);
}

/// Copies each map key into the `id` field of its value.
pub(crate) fn with_ids<T: Keyed>(mut resources: BTreeMap<String, T>) -> BTreeMap<String, T> {
    for (id, resource) in &mut resources {
        resource.set_id(id);
    }
    resources
}

macro_rules! impl_keyed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                fn set_id(&mut self, id: &str) {
                    self.id = id.to_string();
                }
            }
        )*
    };
}

impl_keyed!(Group, Light, Rule, Scene, SceneSummary, Schedule, Sensor);

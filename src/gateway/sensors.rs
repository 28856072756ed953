// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor endpoints.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use super::Gateway;
use crate::command::{SetSensorConfigRequest, SetSensorNameRequest};
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::{Keyed, Sensor, with_ids};

impl<T: Transport> Gateway<T> {
    /// Lists every sensor, keyed by gateway id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn sensors(
        &self,
        cancel: &CancellationToken,
    ) -> Result<BTreeMap<String, Sensor>, Error> {
        self.get("sensors", cancel).await.map(with_ids)
    }

    /// Reads one sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the sensor does not exist.
    pub async fn sensor(&self, id: &str, cancel: &CancellationToken) -> Result<Sensor, Error> {
        let mut sensor: Sensor = self.get(&format!("sensors/{id}"), cancel).await?;
        sensor.set_id(id);
        Ok(sensor)
    }

    /// Changes sensor configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_sensor_config(
        &self,
        id: &str,
        request: &SetSensorConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(&format!("sensors/{id}/config"), request, cancel)
            .await
    }

    /// Renames a sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn set_sensor_name(
        &self,
        id: &str,
        request: &SetSensorNameRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(&format!("sensors/{id}"), request, cancel).await
    }

    /// Removes a sensor from the gateway.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_sensor(&self, id: &str, cancel: &CancellationToken) -> Result<(), Error> {
        self.delete(&format!("sensors/{id}"), cancel).await
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light endpoints.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use super::Gateway;
use crate::command::{SetLightConfigRequest, SetLightStateRequest};
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::{Keyed, Light, with_ids};

impl<T: Transport> Gateway<T> {
    /// Lists every light, keyed by gateway id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn lights(&self, cancel: &CancellationToken) -> Result<BTreeMap<String, Light>, Error> {
        self.get("lights", cancel).await.map(with_ids)
    }

    /// Reads one light.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the light does not exist.
    pub async fn light(&self, id: &str, cancel: &CancellationToken) -> Result<Light, Error> {
        let mut light: Light = self.get(&format!("lights/{id}"), cancel).await?;
        light.set_id(id);
        Ok(light)
    }

    /// Changes the output of a light: on/off, brightness, color.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_light_state(
        &self,
        id: &str,
        request: &SetLightStateRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(&format!("lights/{id}/state"), request, cancel)
            .await
    }

    /// Changes light metadata such as its name.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_light_config(
        &self,
        id: &str,
        request: &SetLightConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(&format!("lights/{id}"), request, cancel).await
    }

    /// Removes a light from the gateway.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_light(&self, id: &str, cancel: &CancellationToken) -> Result<(), Error> {
        self.delete(&format!("lights/{id}"), cancel).await
    }

    /// Removes a light from every group it belongs to.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_light_groups(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.delete(&format!("lights/{id}/groups"), cancel).await
    }

    /// Removes a light from every scene it belongs to.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_light_scenes(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.delete(&format!("lights/{id}/scenes"), cancel).await
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway configuration endpoints.

use tokio_util::sync::CancellationToken;

use super::Gateway;
use crate::command::SetConfigRequest;
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::{FullState, GatewayState, with_ids};

impl<T: Transport> Gateway<T> {
    /// Reads the gateway configuration (`GET config`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn gateway_state(&self, cancel: &CancellationToken) -> Result<GatewayState, Error> {
        self.get("config", cancel).await
    }

    /// Reads the whole datastore in one request.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn full_state(&self, cancel: &CancellationToken) -> Result<FullState, Error> {
        let mut state: FullState = self.get("", cancel).await?;
        state.groups = with_ids(state.groups);
        state.lights = with_ids(state.lights);
        state.rules = with_ids(state.rules);
        state.schedules = with_ids(state.schedules);
        state.sensors = with_ids(state.sensors);
        Ok(state)
    }

    /// Changes gateway configuration (`PUT config`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_config(
        &self,
        request: &SetConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put("config", request, cancel).await
    }

    /// Revokes an API key (`DELETE config/whitelist/{key}`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_api_key(&self, api_key: &str, cancel: &CancellationToken) -> Result<(), Error> {
        self.delete(&format!("config/whitelist/{api_key}"), cancel)
            .await
    }
}

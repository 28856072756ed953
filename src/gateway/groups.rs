// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group endpoints.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use super::Gateway;
use crate::command::{CreateGroupRequest, SetGroupConfigRequest, SetGroupStateRequest};
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::{Group, Keyed, with_ids};

impl<T: Transport> Gateway<T> {
    /// Lists every group, keyed by gateway id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn groups(&self, cancel: &CancellationToken) -> Result<BTreeMap<String, Group>, Error> {
        self.get("groups", cancel).await.map(with_ids)
    }

    /// Reads one group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the group does not exist.
    pub async fn group(&self, id: &str, cancel: &CancellationToken) -> Result<Group, Error> {
        let mut group: Group = self.get(&format!("groups/{id}"), cancel).await?;
        group.set_id(id);
        Ok(group)
    }

    /// Creates a group and returns its id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway does not report an id.
    pub async fn create_group(
        &self,
        request: &CreateGroupRequest,
        cancel: &CancellationToken,
    ) -> Result<String, Error> {
        self.create("groups", request, cancel).await
    }

    /// Changes group membership or metadata.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_group_config(
        &self,
        id: &str,
        request: &SetGroupConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(&format!("groups/{id}"), request, cancel).await
    }

    /// Applies a state change to every light in the group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_group_state(
        &self,
        id: &str,
        request: &SetGroupStateRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(&format!("groups/{id}/action"), request, cancel)
            .await
    }

    /// Deletes a group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_group(&self, id: &str, cancel: &CancellationToken) -> Result<(), Error> {
        self.delete(&format!("groups/{id}"), cancel).await
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene endpoints. Scenes always live inside a group.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use super::Gateway;
use crate::command::{CreateSceneRequest, SetSceneConfigRequest, SetSceneLightStateRequest};
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::{Keyed, Scene, SceneSummary, with_ids};

impl<T: Transport> Gateway<T> {
    /// Lists the scenes of a group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the group does not exist.
    pub async fn scenes(
        &self,
        group_id: &str,
        cancel: &CancellationToken,
    ) -> Result<BTreeMap<String, SceneSummary>, Error> {
        self.get(&format!("groups/{group_id}/scenes"), cancel)
            .await
            .map(with_ids)
    }

    /// Reads one scene including its per-light states.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the scene does not exist.
    pub async fn scene(
        &self,
        group_id: &str,
        scene_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Scene, Error> {
        let mut scene: Scene = self
            .get(&format!("groups/{group_id}/scenes/{scene_id}"), cancel)
            .await?;
        scene.set_id(scene_id);
        Ok(scene)
    }

    /// Creates a scene in a group and returns its id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway does not report an id.
    pub async fn create_scene(
        &self,
        group_id: &str,
        request: &CreateSceneRequest,
        cancel: &CancellationToken,
    ) -> Result<String, Error> {
        self.create(&format!("groups/{group_id}/scenes"), request, cancel)
            .await
    }

    /// Renames a scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_scene_config(
        &self,
        group_id: &str,
        scene_id: &str,
        request: &SetSceneConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(
            &format!("groups/{group_id}/scenes/{scene_id}"),
            request,
            cancel,
        )
        .await
    }

    /// Stores the current state of the group's lights into the scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn store_scene(
        &self,
        group_id: &str,
        scene_id: &str,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.trigger(&format!("groups/{group_id}/scenes/{scene_id}/store"), cancel)
            .await
    }

    /// Recalls a scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn recall_scene(
        &self,
        group_id: &str,
        scene_id: &str,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.trigger(&format!("groups/{group_id}/scenes/{scene_id}/recall"), cancel)
            .await
    }

    /// Changes the stored state of one light inside a scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_scene_light_state(
        &self,
        group_id: &str,
        scene_id: &str,
        light_id: &str,
        request: &SetSceneLightStateRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(
            &format!("groups/{group_id}/scenes/{scene_id}/lights/{light_id}/state"),
            request,
            cancel,
        )
        .await
    }

    /// Deletes a scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_scene(
        &self,
        group_id: &str,
        scene_id: &str,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.delete(&format!("groups/{group_id}/scenes/{scene_id}"), cancel)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeTransport;
    use super::*;
    use crate::protocol::Method;

    #[tokio::test]
    async fn lists_scene_summaries() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"{"1": {"lights": ["1", "2"], "name": "working"}, "2": {"lights": [], "name": "night"}}"#,
        ));
        let scenes = gateway
            .scenes("5", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(scenes["1"].id, "1");
        assert_eq!(scenes["1"].light_ids, ["1", "2"]);
        assert_eq!(scenes["2"].name, "night");
        assert_eq!(gateway.transport().last().path, "groups/5/scenes");
    }

    #[tokio::test]
    async fn scene_detail_gets_id() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"{"lights": [{"id": "1", "on": true, "bri": 111, "transitiontime": 0, "x": 0, "y": 0}], "name": "working"}"#,
        ));
        let scene = gateway
            .scene("5", "1", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(scene.id, "1");
        assert_eq!(scene.lights[0].brightness, 111);
    }

    #[tokio::test]
    async fn create_scene_in_group() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"[{"success": {"id": "3"}}]"#,
        ));
        let id = gateway
            .create_scene("5", &CreateSceneRequest::new("reading"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(id, "3");
        let req = gateway.transport().last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "groups/5/scenes");
    }

    #[tokio::test]
    async fn store_and_recall_paths() {
        let transport = FakeTransport::default();
        transport.push(200, r#"[{"success": {"id": "3"}}]"#);
        transport.push(200, r#"[{"success": {"id": "3"}}]"#);
        let gateway = Gateway::new(transport);
        let cancel = CancellationToken::new();

        gateway.store_scene("5", "3", &cancel).await.unwrap();
        assert_eq!(gateway.transport().last().path, "groups/5/scenes/3/store");

        gateway.recall_scene("5", "3", &cancel).await.unwrap();
        assert_eq!(gateway.transport().last().path, "groups/5/scenes/3/recall");
    }

    #[tokio::test]
    async fn scene_light_state_path() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"[{"success": {"/groups/5/scenes/3/lights/1/state/bri": 80}}]"#,
        ));
        let request = SetSceneLightStateRequest {
            brightness: Some(80),
            ..SetSceneLightStateRequest::default()
        };
        gateway
            .set_scene_light_state("5", "3", "1", &request, &CancellationToken::new())
            .await
            .unwrap();

        let req = gateway.transport().last();
        assert_eq!(req.path, "groups/5/scenes/3/lights/1/state");
        assert_eq!(req.body, Some(serde_json::json!({"bri": 80})));
    }

    #[tokio::test]
    async fn recall_unknown_scene_fails() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"[{"error": {"type": 3, "address": "/groups/5/scenes/9", "description": "resource, /groups/5/scenes/9, not available"}}]"#,
        ));
        let err = gateway
            .recall_scene("5", "9", &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(err.gateway_error().unwrap().is_resource_unavailable());
    }
}

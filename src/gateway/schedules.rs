// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule endpoints.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use super::Gateway;
use crate::command::{CreateScheduleRequest, SetScheduleConfigRequest};
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::{Keyed, Schedule, with_ids};

impl<T: Transport> Gateway<T> {
    /// Lists every schedule, keyed by gateway id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn schedules(
        &self,
        cancel: &CancellationToken,
    ) -> Result<BTreeMap<String, Schedule>, Error> {
        self.get("schedules", cancel).await.map(with_ids)
    }

    /// Reads one schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the schedule does not exist.
    pub async fn schedule(&self, id: &str, cancel: &CancellationToken) -> Result<Schedule, Error> {
        let mut schedule: Schedule = self.get(&format!("schedules/{id}"), cancel).await?;
        schedule.set_id(id);
        Ok(schedule)
    }

    /// Creates a schedule and returns its id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway does not report an id.
    pub async fn create_schedule(
        &self,
        request: &CreateScheduleRequest,
        cancel: &CancellationToken,
    ) -> Result<String, Error> {
        self.create("schedules", request, cancel).await
    }

    /// Updates a schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_schedule_config(
        &self,
        id: &str,
        request: &SetScheduleConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(&format!("schedules/{id}"), request, cancel).await
    }

    /// Deletes a schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_schedule(&self, id: &str, cancel: &CancellationToken) -> Result<(), Error> {
        self.delete(&format!("schedules/{id}"), cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeTransport;
    use super::*;
    use crate::protocol::Method;
    use crate::types::ScheduleCommand;

    #[tokio::test]
    async fn create_weekday_schedule() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"[{"success": {"id": "2"}}]"#,
        ));
        let request = CreateScheduleRequest {
            name: "Lights off".to_string(),
            command: ScheduleCommand {
                address: "/api/KEY/groups/1/action".to_string(),
                method: "PUT".to_string(),
                body: serde_json::json!({"on": false}),
            },
            status: "enabled".to_string(),
            time: "W124/T23:00:00".to_string(),
            ..CreateScheduleRequest::default()
        };
        let id = gateway
            .create_schedule(&request, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(id, "2");
        let req = gateway.transport().last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "schedules");
        let body = req.body.unwrap();
        assert_eq!(body["time"], "W124/T23:00:00");
        assert_eq!(body["autodelete"], false);
    }

    #[tokio::test]
    async fn list_and_delete() {
        let transport = FakeTransport::default();
        transport.push(200, r#"{"2": {"name": "Lights off", "time": "PT00:10:00"}}"#);
        transport.push(200, r#"[{"success": "/schedules/2 deleted."}]"#);
        let gateway = Gateway::new(transport);
        let cancel = CancellationToken::new();

        let schedules = gateway.schedules(&cancel).await.unwrap();
        assert_eq!(schedules["2"].id, "2");
        assert_eq!(schedules["2"].time, "PT00:10:00");

        gateway.delete_schedule("2", &cancel).await.unwrap();
        let req = gateway.transport().last();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "schedules/2");
    }

    #[tokio::test]
    async fn set_schedule_status() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"[{"success": {"/schedules/2/status": "disabled"}}]"#,
        ));
        let request = SetScheduleConfigRequest {
            status: Some("disabled".to_string()),
            ..SetScheduleConfigRequest::default()
        };
        gateway
            .set_schedule_config("2", &request, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            gateway.transport().last().body,
            Some(serde_json::json!({"status": "disabled"}))
        );
    }
}

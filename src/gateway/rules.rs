// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rule endpoints.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use super::Gateway;
use crate::command::{CreateRuleRequest, SetRuleRequest};
use crate::error::Error;
use crate::protocol::Transport;
use crate::types::{Keyed, Rule, with_ids};

impl<T: Transport> Gateway<T> {
    /// Lists every rule, keyed by gateway id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn rules(&self, cancel: &CancellationToken) -> Result<BTreeMap<String, Rule>, Error> {
        self.get("rules", cancel).await.map(with_ids)
    }

    /// Reads one rule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the rule does not exist.
    pub async fn rule(&self, id: &str, cancel: &CancellationToken) -> Result<Rule, Error> {
        let mut rule: Rule = self.get(&format!("rules/{id}"), cancel).await?;
        rule.set_id(id);
        Ok(rule)
    }

    /// Creates a rule and returns its id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway does not report an id.
    pub async fn create_rule(
        &self,
        request: &CreateRuleRequest,
        cancel: &CancellationToken,
    ) -> Result<String, Error> {
        self.create("rules", request, cancel).await
    }

    /// Updates a rule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or any attribute is rejected.
    pub async fn set_rule(
        &self,
        id: &str,
        request: &SetRuleRequest,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        self.put(&format!("rules/{id}"), request, cancel).await
    }

    /// Deletes a rule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects it.
    pub async fn delete_rule(&self, id: &str, cancel: &CancellationToken) -> Result<(), Error> {
        self.delete(&format!("rules/{id}"), cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeTransport;
    use super::*;
    use crate::protocol::Method;
    use crate::types::{RuleAction, RuleCondition};

    fn button_rule() -> CreateRuleRequest {
        CreateRuleRequest {
            name: "Switch on".to_string(),
            actions: vec![RuleAction {
                address: "/groups/1/action".to_string(),
                body: serde_json::json!({"on": true}),
                method: "PUT".to_string(),
            }],
            conditions: vec![RuleCondition {
                address: "/sensors/2/state/buttonevent".to_string(),
                operator: "eq".to_string(),
                value: Some("1002".to_string()),
            }],
            ..CreateRuleRequest::default()
        }
    }

    #[tokio::test]
    async fn create_rule_posts_body() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"[{"success": {"id": "6"}}]"#,
        ));
        let id = gateway
            .create_rule(&button_rule(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(id, "6");
        let req = gateway.transport().last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "rules");
        let body = req.body.unwrap();
        assert_eq!(body["actions"][0]["address"], "/groups/1/action");
        assert_eq!(body["conditions"][0]["value"], "1002");
        assert!(body.get("periodic").is_none());
    }

    #[tokio::test]
    async fn rejected_rule_is_gateway_error() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"[{"error": {"type": 7, "address": "/rules/conditions", "description": "invalid value, xx, for parameter, conditions"}}]"#,
        ));
        let err = gateway
            .create_rule(&button_rule(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.gateway_error().unwrap().kind, 7);
    }

    #[tokio::test]
    async fn rule_by_id() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"{"name": "Switch on", "status": "enabled", "timestriggered": 3}"#,
        ));
        let rule = gateway.rule("6", &CancellationToken::new()).await.unwrap();

        assert_eq!(rule.id, "6");
        assert_eq!(rule.triggered_count, 3);
    }

    #[tokio::test]
    async fn disable_rule() {
        let gateway = Gateway::new(FakeTransport::replying(
            200,
            r#"[{"success": {"/rules/6/status": "disabled"}}]"#,
        ));
        let request = SetRuleRequest {
            status: Some("disabled".to_string()),
            ..SetRuleRequest::default()
        };
        gateway
            .set_rule("6", &request, &CancellationToken::new())
            .await
            .unwrap();

        let req = gateway.transport().last();
        assert_eq!(req.path, "rules/6");
        assert_eq!(req.body, Some(serde_json::json!({"status": "disabled"})));
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rule resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rule: actions executed when all conditions hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    #[serde(skip)]
    pub id: String,
    pub actions: Vec<RuleAction>,
    pub conditions: Vec<RuleCondition>,
    #[serde(rename = "created")]
    pub created_at: String,
    pub etag: String,
    #[serde(rename = "lasttriggered")]
    pub last_triggered_at: String,
    pub name: String,
    pub owner: String,
    pub periodic: i32,
    /// `"enabled"` or `"disabled"`.
    pub status: String,
    #[serde(rename = "timestriggered")]
    pub triggered_count: i32,
}

/// A single action of a rule.
///
/// `body` is an arbitrary JSON object forwarded to `address`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleAction {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub body: Value,
    /// One of `PUT`, `POST`, `DELETE`, `BIND`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,
}

/// A single condition of a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleCondition {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// One of `eq`, `gt`, `lt`, `dx`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_with_actions() {
        let json = r#"{
            "actions": [{"address": "/groups/1/action", "body": {"on": true}, "method": "PUT"}],
            "conditions": [{"address": "/sensors/2/state/buttonevent", "operator": "eq", "value": "1002"}],
            "created": "2024-01-05T12:00:00",
            "etag": "eb2e4d3f0d6b6d1d3e6d0a8a0c5e8b2f",
            "lasttriggered": "none",
            "name": "Switch on",
            "owner": "abc",
            "periodic": 0,
            "status": "enabled",
            "timestriggered": 4
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.actions[0].body["on"], Value::Bool(true));
        assert_eq!(rule.conditions[0].value.as_deref(), Some("1002"));
        assert_eq!(rule.triggered_count, 4);
    }

    #[test]
    fn condition_without_value_serializes_compactly() {
        let cond = RuleCondition {
            address: "/sensors/2/state/buttonevent".to_string(),
            operator: "dx".to_string(),
            value: None,
        };
        assert_eq!(
            serde_json::to_string(&cond).unwrap(),
            r#"{"address":"/sensors/2/state/buttonevent","operator":"dx"}"#
        );
    }
}

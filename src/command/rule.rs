// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rule requests.

use serde::Serialize;

use crate::types::{RuleAction, RuleCondition};

/// Creates a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateRuleRequest {
    pub name: String,
    pub actions: Vec<RuleAction>,
    pub conditions: Vec<RuleCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic: Option<i32>,
    /// `"enabled"` or `"disabled"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Changes an existing rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<RuleAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<RuleCondition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_rule_status_only() {
        let req = SetRuleRequest {
            status: Some("disabled".to_string()),
            ..SetRuleRequest::default()
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"status":"disabled"}"#
        );
    }
}

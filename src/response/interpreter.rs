// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reduction of raw response bodies to typed results.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Envelope;
use crate::error::{Error, ParseError};

/// Decodes the body of a `GET` request.
///
/// A successful status means the body is the resource itself. Any other
/// status means the body is a result list whose first entry explains the
/// failure.
///
/// # Errors
///
/// Returns `Error::Parse` if the body does not match `T` (or is not a result
/// list on failure), `Error::MalformedResponse` if the result list is empty,
/// and `Error::Gateway` with the first entry's error record otherwise.
///
/// # Examples
///
/// ```
/// use deconz_lib::response::decode_get;
/// use deconz_lib::types::LightState;
///
/// let state: LightState = decode_get(200, br#"{"on": true, "bri": 42}"#).unwrap();
/// assert_eq!(state.brightness, Some(42));
///
/// let err = decode_get::<LightState>(
///     404,
///     br#"[{"error": {"type": 3, "address": "/lights/9", "description": "not available"}}]"#,
/// )
/// .unwrap_err();
/// assert!(err.gateway_error().unwrap().is_resource_unavailable());
/// ```
pub fn decode_get<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, Error> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map_err(|e| ParseError::Json(e).into());
    }

    let envelope = parse_envelope(body)?;
    let entry = envelope.first()?;
    tracing::warn!(status, error = ?entry.error(), "Gateway rejected GET request");
    Err(entry.to_error())
}

/// Decodes the body of a `PUT`, `POST` or `DELETE` request.
///
/// The status code is not consulted; the gateway reports per-attribute
/// results in the body and the first entry without success data decides
/// the failure.
///
/// # Errors
///
/// Returns `Error::Parse` if the body is not a result list,
/// `Error::MalformedResponse` if the list is empty, and `Error::Gateway`
/// with the first failing entry's error record otherwise.
pub fn decode_mutation(body: &[u8]) -> Result<(), Error> {
    let envelope = parse_envelope(body)?;
    let outcome = envelope.outcome();
    if let Err(Error::Gateway(err)) = &outcome {
        tracing::warn!(error = %err, "Gateway rejected mutation");
    }
    outcome
}

/// Extracts a gateway-assigned identifier from a creation response.
///
/// The identifier is looked up under `key` in the first entry's success
/// map, e.g. `[{"success": {"id": "42"}}]`.
///
/// # Errors
///
/// Returns `Error::MalformedResponse` if the list is empty,
/// `ParseError::MissingField` if `key` is absent, and
/// `ParseError::TypeMismatch` if the value is not a string.
///
/// # Examples
///
/// ```
/// use deconz_lib::response::extract_created_id;
///
/// let id = extract_created_id(br#"[{"success": {"id": "42"}}]"#, "id").unwrap();
/// assert_eq!(id, "42");
/// ```
pub fn extract_created_id(body: &[u8], key: &str) -> Result<String, Error> {
    let envelope = parse_envelope(body)?;
    let entry = envelope.first()?;

    let Some(value) = entry.success().and_then(|m| m.get(key)) else {
        if let Some(err) = entry.error() {
            return Err(Error::Gateway(err.clone()));
        }
        return Err(ParseError::MissingField(key.to_string()).into());
    };

    match value {
        Value::String(id) => Ok(id.clone()),
        other => Err(ParseError::TypeMismatch {
            field: key.to_string(),
            expected: "string",
            found: json_type_name(other),
        }
        .into()),
    }
}

fn parse_envelope(body: &[u8]) -> Result<Envelope, Error> {
    serde_json::from_slice(body).map_err(|e| ParseError::Json(e).into())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::Light;

    #[test]
    fn get_success_decodes_resource() {
        let body = br#"{"name": "Desk", "type": "Color light", "state": {"on": false}}"#;
        let light: Light = decode_get(200, body).unwrap();
        assert_eq!(light.name, "Desk");
        assert_eq!(light.state.on, Some(false));
    }

    #[test]
    fn get_success_decodes_collection() {
        let body = br#"{"1": {"name": "Desk"}, "2": {"name": "Hall"}}"#;
        let lights: BTreeMap<String, Light> = decode_get(200, body).unwrap();
        assert_eq!(lights.len(), 2);
        assert_eq!(lights["2"].name, "Hall");
    }

    #[test]
    fn get_failure_returns_first_error() {
        let body = br#"[
            {"error": {"type": 1, "address": "/", "description": "unauthorized user"}},
            {"error": {"type": 3, "address": "/x", "description": "ignored"}}
        ]"#;
        let err = decode_get::<Light>(403, body).unwrap_err();
        assert!(err.gateway_error().unwrap().is_unauthorized());
    }

    #[test]
    fn get_failure_with_empty_list_is_malformed() {
        let err = decode_get::<Light>(500, b"[]").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse));
    }

    #[test]
    fn get_success_with_wrong_shape_is_parse_error() {
        let err = decode_get::<Light>(200, b"[1, 2]").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }

    #[test]
    fn mutation_success() {
        let body = br#"[{"success": {"/lights/1/state/on": true}}, {"success": {"/lights/1/state/bri": 5}}]"#;
        assert!(decode_mutation(body).is_ok());
    }

    #[test]
    fn mutation_first_failure_wins() {
        let body = br#"[
            {"success": {"/groups/1/action/on": true}},
            {"error": {"type": 7, "address": "/groups/1/action/hue", "description": "invalid value"}},
            {"success": {"/groups/1/action/sat": 10}}
        ]"#;
        let err = decode_mutation(body).unwrap_err();
        assert_eq!(
            err.gateway_error().unwrap().address,
            "/groups/1/action/hue"
        );
    }

    #[test]
    fn mutation_empty_list_is_malformed() {
        assert!(matches!(decode_mutation(b"[]"), Err(Error::MalformedResponse)));
    }

    #[test]
    fn mutation_non_list_is_parse_error() {
        let err = decode_mutation(br#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }

    #[test]
    fn created_id_string() {
        let id = extract_created_id(br#"[{"success": {"id": "42"}}]"#, "id").unwrap();
        assert_eq!(id, "42");
    }

    #[test]
    fn created_id_non_string_is_type_mismatch() {
        let err = extract_created_id(br#"[{"success": {"id": 42}}]"#, "id").unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::TypeMismatch { found: "number", .. })
        ));
    }

    #[test]
    fn created_id_absent_is_missing_field() {
        let err = extract_created_id(br#"[{"success": {}}]"#, "id").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::MissingField(ref f)) if f == "id"));
    }

    #[test]
    fn created_id_empty_list_is_malformed() {
        let err = extract_created_id(b"[]", "id").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse));
    }

    #[test]
    fn created_id_on_rejected_create_is_gateway_error() {
        let body = br#"[{"error": {"type": 5, "address": "/groups", "description": "missing parameters in body"}}]"#;
        let err = extract_created_id(body, "id").unwrap_err();
        assert_eq!(err.gateway_error().unwrap().kind, 5);
    }

    #[test]
    fn created_id_custom_key() {
        let body = br#"[{"success": {"username": "83B7780291"}}]"#;
        assert_eq!(extract_created_id(body, "username").unwrap(), "83B7780291");
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interpretation of deCONZ REST responses.
//!
//! A plain `GET` of a resource answers with the resource object itself.
//! Every mutation, and every failed `GET`, answers with a result list
//! (an [`Envelope`]) of the form:
//!
//! ```json
//! [
//!   {"success": {"/lights/1/state/on": true}},
//!   {"error": {"type": 7, "address": "/lights/1/state/bri", "description": "invalid value"}}
//! ]
//! ```
//!
//! The functions in this module reduce those bodies to a single typed result
//! so every endpoint shares the same failure semantics.

mod envelope;
mod interpreter;

pub use envelope::{Envelope, GatewayError, ResponseEntry};
pub use interpreter::{decode_get, decode_mutation, extract_created_id};

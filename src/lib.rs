// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `deCONZ` Lib - A Rust client for the deCONZ Zigbee gateway.
//!
//! This library provides async APIs for the gateway's REST interface and
//! decodes the notifications it pushes over its websocket channel.
//!
//! # Supported Features
//!
//! - **Lights and groups**: list, read, switch, dim, color, rename, delete
//! - **Scenes**: create, store, recall, per-light state
//! - **Sensors**: readings, configuration, naming
//! - **Rules and schedules**: full CRUD
//! - **Gateway**: configuration, full datastore dump, API key management
//! - **Push events**: typed decoding of websocket notifications
//!
//! # Quick Start
//!
//! ## Obtaining an API key
//!
//! Unlock the gateway in the Phoscon app first, then:
//!
//! ```no_run
//! use deconz_lib::HttpClient;
//! use deconz_lib::command::CreateApiKeyRequest;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> deconz_lib::Result<()> {
//!     let client = HttpClient::new("192.168.1.40", "")?;
//!     let key = client
//!         .create_api_key(&CreateApiKeyRequest::new("my-app"), &CancellationToken::new())
//!         .await?;
//!     println!("api key: {key}");
//!     Ok(())
//! }
//! ```
//!
//! ## Controlling lights
//!
//! ```no_run
//! use deconz_lib::Gateway;
//! use deconz_lib::command::SetLightStateRequest;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> deconz_lib::Result<()> {
//!     let gateway = Gateway::http("192.168.1.40", "83B7780291")?;
//!     let cancel = CancellationToken::new();
//!
//!     gateway
//!         .set_light_state("1", &SetLightStateRequest::on().with_brightness(180), &cancel)
//!         .await?;
//!
//!     // a rejected attribute surfaces as the gateway's own error record
//!     if let Err(e) = gateway.recall_scene("1", "99", &cancel).await {
//!         if let Some(gw) = e.gateway_error() {
//!             eprintln!("gateway said: {gw}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Push events
//!
//! ```no_run
//! use deconz_lib::Gateway;
//! use futures_util::StreamExt;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> deconz_lib::Result<()> {
//!     let gateway = Gateway::http("192.168.1.40", "83B7780291")?;
//!     let mut events = gateway.event_stream(&CancellationToken::new()).await?;
//!
//!     while let Some(event) = events.next().await {
//!         let event = event?;
//!         if let Some(state) = event.sensor_state() {
//!             println!("sensor {:?}: button {:?}", event.resource_id(), state.button_event);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod error;
pub mod event;
mod gateway;
pub mod protocol;
pub mod response;
pub mod types;

pub use error::{Error, GatewayError, ParseError, ProtocolError, Result};
pub use event::{UpdateEvent, decode_event};
pub use gateway::Gateway;
#[cfg(feature = "websocket")]
pub use protocol::EventStream;
pub use protocol::{GatewayConfig, HttpClient, Transport};

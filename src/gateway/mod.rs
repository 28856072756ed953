// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for a deCONZ gateway.
//!
//! [`Gateway`] binds one [`Transport`] and exposes one method per REST
//! endpoint. Every method takes a [`CancellationToken`]; firing it abandons
//! the in-flight request with [`ProtocolError::Cancelled`](crate::error::ProtocolError::Cancelled).
//!
//! All endpoints share the interpretation rules of [`crate::response`]:
//! reads go through [`decode_get`], writes and deletes through
//! [`decode_mutation`], and creations through [`extract_created_id`].
//!
//! ```no_run
//! use deconz_lib::Gateway;
//! use deconz_lib::command::SetLightStateRequest;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> deconz_lib::Result<()> {
//! let gateway = Gateway::http("192.168.1.40", "83B7780291")?;
//! let cancel = CancellationToken::new();
//!
//! for (id, light) in gateway.lights(&cancel).await? {
//!     println!("{id}: {} on={:?}", light.name, light.state.on);
//! }
//!
//! gateway
//!     .set_light_state("3", &SetLightStateRequest::on().with_brightness(200), &cancel)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod groups;
mod lights;
mod rules;
mod scenes;
mod schedules;
mod sensors;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, ParseError};
use crate::protocol::{GatewayConfig, HttpClient, Method, Transport};
use crate::response::{decode_get, decode_mutation, extract_created_id};

/// A deCONZ gateway reachable through a transport.
///
/// The client holds no mutable state; it can be shared between tasks and
/// concurrent calls are fully independent.
#[derive(Debug, Clone)]
pub struct Gateway<T: Transport> {
    transport: T,
}

impl Gateway<HttpClient> {
    /// Creates an HTTP client for `host` on the default port.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http(host: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        Self::http_config(GatewayConfig::new(host).with_api_key(api_key))
    }

    /// Creates an HTTP client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http_config(config: GatewayConfig) -> Result<Self, Error> {
        Ok(Self::new(config.into_client()?))
    }

    /// Opens the websocket push channel.
    ///
    /// The port comes from [`GatewayConfig::with_websocket_port`] if set,
    /// otherwise from the gateway's `websocketport` configuration value.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration cannot be read, the reported port
    /// is not a valid TCP port, or the connection fails.
    #[cfg(feature = "websocket")]
    pub async fn event_stream(
        &self,
        cancel: &CancellationToken,
    ) -> Result<crate::protocol::EventStream, Error> {
        let config = self.transport.config();
        let port = match config.websocket_port() {
            Some(port) => port,
            None => {
                let reported = self.gateway_state(cancel).await?.websocket_port;
                u16::try_from(reported).map_err(|_| {
                    crate::error::ProtocolError::InvalidAddress(format!("websocket port {reported}"))
                })?
            }
        };

        crate::protocol::EventStream::connect(config.host(), port, cancel).await
    }
}

impl<T: Transport> Gateway<T> {
    /// Wraps an existing transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<R, Error> {
        let response = self
            .transport
            .request(Method::Get, path, None, cancel)
            .await?;
        decode_get(response.status(), response.body())
    }

    async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<(), Error> {
        let body = encode(body)?;
        let response = self
            .transport
            .request(Method::Put, path, Some(body), cancel)
            .await?;
        decode_mutation(response.body())
    }

    /// `PUT` without a body, for trigger endpoints such as scene recall.
    async fn trigger(&self, path: &str, cancel: &CancellationToken) -> Result<(), Error> {
        let response = self
            .transport
            .request(Method::Put, path, None, cancel)
            .await?;
        decode_mutation(response.body())
    }

    async fn create<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<String, Error> {
        let body = encode(body)?;
        let response = self
            .transport
            .request(Method::Post, path, Some(body), cancel)
            .await?;
        let id = extract_created_id(response.body(), "id")?;
        tracing::debug!(path, id = %id, "Resource created");
        Ok(id)
    }

    async fn delete(&self, path: &str, cancel: &CancellationToken) -> Result<(), Error> {
        let response = self
            .transport
            .request(Method::Delete, path, None, cancel)
            .await?;
        decode_mutation(response.body())
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(body).map_err(|e| ParseError::Json(e).into())
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the deCONZ REST API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tokio_util::sync::CancellationToken;

use crate::command::CreateApiKeyRequest;
use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{Method, RawResponse, Transport};
use crate::response::extract_created_id;

// ============================================================================
// GatewayConfig - Connection parameters for one gateway
// ============================================================================

/// Connection parameters for a deCONZ gateway.
///
/// # Examples
///
/// ```
/// use deconz_lib::protocol::GatewayConfig;
/// use std::time::Duration;
///
/// let config = GatewayConfig::new("192.168.1.40")
///     .with_port(8080)
///     .with_api_key("83B7780291")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.api_url(), "http://192.168.1.40:8080/api/83B7780291/");
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    host: String,
    port: u16,
    api_key: String,
    timeout: Duration,
    websocket_port: Option<u16>,
}

impl GatewayConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the gateway
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            api_key: String::new(),
            timeout: Self::DEFAULT_TIMEOUT,
            websocket_port: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the API key used in every request path.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the push channel port instead of reading it from the
    /// gateway configuration.
    #[must_use]
    pub fn with_websocket_port(mut self, port: u16) -> Self {
        self.websocket_port = Some(port);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the push channel port override, if set.
    #[must_use]
    pub fn websocket_port(&self) -> Option<u16> {
        self.websocket_port
    }

    /// Builds the unauthenticated API root, `http://{host}:{port}/api`.
    #[must_use]
    pub fn root_url(&self) -> String {
        format!("http://{}:{}/api", self.host, self.port)
    }

    /// Builds the keyed API root that request paths are appended to.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}/{}/", self.root_url(), self.api_key)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            root_url: self.root_url(),
            api_url: self.api_url(),
            client,
            config: self,
        })
    }
}

// ============================================================================
// HttpClient - reqwest-backed Transport
// ============================================================================

/// HTTP client bound to one gateway and API key.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use deconz_lib::protocol::{GatewayConfig, Method, Transport};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> deconz_lib::Result<()> {
/// let client = GatewayConfig::new("192.168.1.40")
///     .with_api_key("83B7780291")
///     .into_client()?;
///
/// let response = client
///     .request(Method::Get, "lights", None, &CancellationToken::new())
///     .await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    root_url: String,
    api_url: String,
    client: Client,
    config: GatewayConfig,
}

impl HttpClient {
    /// Creates a client for `host` on the default port with the given key.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ProtocolError> {
        GatewayConfig::new(host).with_api_key(api_key).into_client()
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Returns the keyed API root.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Builds the URL for a request path.
    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// Requests a new API key from an unlocked gateway.
    ///
    /// This is the only call made outside the keyed API root; the client's
    /// own key is not used.
    ///
    /// # Errors
    ///
    /// Returns `Error::Gateway` (type 101) if the gateway is locked, and the
    /// usual transport and decode errors otherwise.
    pub async fn create_api_key(
        &self,
        request: &CreateApiKeyRequest,
        cancel: &CancellationToken,
    ) -> Result<String, Error> {
        let body = serde_json::to_vec(request).map_err(ParseError::Json)?;
        let response = self
            .send(Method::Post, self.root_url.clone(), Some(body), cancel)
            .await?;
        extract_created_id(response.body(), "username")
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ProtocolError> {
        tracing::debug!(%method, url = %url, "Sending HTTP request");

        let mut builder = self.client.request(method.into(), &url);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let exchange = async move {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(RawResponse::new(status, body.to_vec()))
        };

        // Dropping the in-flight exchange releases its connection.
        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(%method, url = %url, "HTTP request cancelled");
                return Err(ProtocolError::Cancelled);
            }
            result = exchange => result,
        };

        let response = result.map_err(|e| self.classify(e))?;

        tracing::debug!(
            status = response.status(),
            body = %String::from_utf8_lossy(response.body()),
            "Received HTTP response"
        );

        Ok(response)
    }

    fn classify(&self, err: reqwest::Error) -> ProtocolError {
        if err.is_timeout() {
            let millis = u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX);
            ProtocolError::Timeout(millis)
        } else {
            ProtocolError::Http(err)
        }
    }
}

impl Transport for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ProtocolError> {
        self.send(method, self.build_url(path), body, cancel).await
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the websocket push channel against a local server.

#![cfg(feature = "websocket")]

use deconz_lib::protocol::EventStream;
use deconz_lib::{Error, Gateway, GatewayConfig, ProtocolError};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIGHT_CHANGED: &str =
    r#"{"t":"event","e":"changed","r":"lights","id":"3","state":{"on":true,"bri":120}}"#;

/// Serves one websocket client: sends `frames`, closes, then drains the
/// client's close reply.
async fn push_server(frames: Vec<Message>) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        for frame in frames {
            ws.send(frame).await.unwrap();
        }
        ws.close(None).await.unwrap();
        while ws.next().await.is_some() {}
    });

    port
}

// ============================================================================
// EventStream Tests
// ============================================================================

mod event_stream {
    use super::*;

    #[tokio::test]
    async fn bad_message_does_not_end_stream() {
        let port = push_server(vec![
            Message::Text("not json".to_string()),
            Message::Binary(vec![1, 2, 3]),
            Message::Text(LIGHT_CHANGED.to_string()),
        ])
        .await;

        let mut events = EventStream::connect("127.0.0.1", port, &CancellationToken::new())
            .await
            .unwrap();

        let first = events.next().await.unwrap();
        assert!(matches!(first, Err(Error::Parse(_))));

        // the binary frame is skipped
        let second = events.next().await.unwrap().unwrap();
        assert_eq!(second.resource_id(), Some("3"));
        assert_eq!(second.light_state().unwrap().brightness, Some(120));

        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn cancelled_before_connect() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = EventStream::connect("127.0.0.1", 1, &cancel).await;
        assert!(matches!(result, Err(e) if e.is_cancelled()));
    }
}

// ============================================================================
// Gateway::event_stream Tests
// ============================================================================

mod gateway_event_stream {
    use super::*;

    const KEY: &str = "83B7780291";

    fn config_for(mock_server: &MockServer) -> GatewayConfig {
        let addr = mock_server.address();
        GatewayConfig::new(addr.ip().to_string())
            .with_port(addr.port())
            .with_api_key(KEY)
    }

    #[tokio::test]
    async fn port_comes_from_gateway_config() {
        let port = push_server(vec![Message::Text(LIGHT_CHANGED.to_string())]).await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/{KEY}/config")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "Phoscon-GW",
                "websocketport": port
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = Gateway::http_config(config_for(&mock_server)).unwrap();
        let mut events = gateway
            .event_stream(&CancellationToken::new())
            .await
            .unwrap();

        let event = events.next().await.unwrap().unwrap();
        assert_eq!(event.light_state().unwrap().on, Some(true));
    }

    #[tokio::test]
    async fn configured_port_skips_lookup() {
        let port = push_server(vec![Message::Text(LIGHT_CHANGED.to_string())]).await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let gateway =
            Gateway::http_config(config_for(&mock_server).with_websocket_port(port)).unwrap();
        let mut events = gateway
            .event_stream(&CancellationToken::new())
            .await
            .unwrap();

        assert!(events.next().await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn out_of_range_port_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/{KEY}/config")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"websocketport": 70000})),
            )
            .mount(&mock_server)
            .await;

        let gateway = Gateway::http_config(config_for(&mock_server)).unwrap();
        let result = gateway.event_stream(&CancellationToken::new()).await;

        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::InvalidAddress(_)))
        ));
    }
}

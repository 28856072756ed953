// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Websocket push channel.

use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures_util::{Stream, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tokio_util::sync::CancellationToken;

use crate::error::{Error, ProtocolError};
use crate::event::{UpdateEvent, decode_event};

/// Stream of decoded push notifications.
///
/// Each text frame yields one item. A message that fails to decode yields
/// an `Err` item and the stream keeps going; the stream ends when the
/// gateway closes the connection. Frames are read strictly in order, one
/// at a time.
///
/// # Examples
///
/// ```no_run
/// use deconz_lib::protocol::EventStream;
/// use futures_util::StreamExt;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> deconz_lib::Result<()> {
/// let mut events = EventStream::connect("192.168.1.40", 443, &CancellationToken::new()).await?;
///
/// while let Some(event) = events.next().await {
///     match event {
///         Ok(event) => println!("{} {}", event.event(), event.resource()),
///         Err(e) => eprintln!("bad message: {e}"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EventStream {
    inner: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl EventStream {
    /// Connects to the push channel at `ws://{host}:{port}`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Cancelled` if `cancel` fires before the
    /// handshake completes, and `ProtocolError::WebSocket` if it fails.
    pub async fn connect(
        host: &str,
        port: u16,
        cancel: &CancellationToken,
    ) -> Result<Self, Error> {
        let url = format!("ws://{host}:{port}");
        tracing::debug!(url = %url, "Connecting to push channel");

        let (inner, _) = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(ProtocolError::Cancelled.into()),
            result = connect_async(url.as_str()) => result.map_err(ProtocolError::WebSocket)?,
        };

        tracing::info!(url = %url, "Push channel connected");
        Ok(Self { inner })
    }
}

impl Stream for EventStream {
    type Item = Result<UpdateEvent, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            let Some(message) = ready!(self.inner.poll_next_unpin(cx)) else {
                return Poll::Ready(None);
            };

            match message {
                Ok(Message::Text(text)) => return Poll::Ready(Some(decode_event(text.as_bytes()))),
                Ok(Message::Close(frame)) => {
                    tracing::debug!(?frame, "Push channel closed by gateway");
                }
                // binary, ping and pong frames
                Ok(_) => {}
                Err(e) => return Poll::Ready(Some(Err(ProtocolError::WebSocket(e).into()))),
            }
        }
    }
}

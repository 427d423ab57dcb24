//! WebSocket を使ったトランスポート実装
//!
//! ## 責務
//!
//! - 分割された WebSocket の受信側をテキストペイロードのストリームとして扱う
//! - ドメインの `Message` を JSON（`RoomMessage`）としてテキストフレームで送信する

use async_trait::async_trait;
use axum::extract::ws::{Message as Frame, WebSocket};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};

use crate::{
    domain::{InboundTransport, Message, OutboundTransport, TransportError},
    infrastructure::dto::websocket::RoomMessage,
};

/// Read half of an axum [`WebSocket`].
pub struct WebSocketReader {
    stream: SplitStream<WebSocket>,
}

/// Write half of an axum [`WebSocket`].
pub struct WebSocketWriter {
    sink: SplitSink<WebSocket, Frame>,
}

/// Split a socket into its transport halves.
pub fn split(socket: WebSocket) -> (WebSocketReader, WebSocketWriter) {
    let (sink, stream) = socket.split();
    (WebSocketReader { stream }, WebSocketWriter { sink })
}

#[async_trait]
impl InboundTransport for WebSocketReader {
    async fn receive_text(&mut self) -> Result<String, TransportError> {
        while let Some(frame) = self.stream.next().await {
            let frame = frame.map_err(|e| TransportError::Io(e.to_string()))?;
            match frame {
                Frame::Text(text) => return Ok(text.to_string()),
                Frame::Binary(data) => match String::from_utf8(data.to_vec()) {
                    Ok(text) => return Ok(text),
                    Err(_) => {
                        tracing::debug!("Ignoring non-UTF-8 binary frame ({} bytes)", data.len());
                    }
                },
                Frame::Close(_) => return Err(TransportError::Closed),
                // Ping/pong is handled automatically by the WebSocket protocol
                Frame::Ping(_) | Frame::Pong(_) => {}
            }
        }
        Err(TransportError::Closed)
    }
}

#[async_trait]
impl OutboundTransport for WebSocketWriter {
    async fn send_message(&mut self, message: &Message) -> Result<(), TransportError> {
        let dto = RoomMessage::from(message.clone());
        let json = serde_json::to_string(&dto).map_err(|e| TransportError::Encode(e.to_string()))?;
        self.sink
            .send(Frame::Text(json.into()))
            .await
            .map_err(|e| TransportError::Io(e.to_string()))
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.sink
            .close()
            .await
            .map_err(|e| TransportError::Io(e.to_string()))
    }
}

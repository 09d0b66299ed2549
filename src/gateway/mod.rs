//! Socket gateway
//!
//! Owns the live websocket connections and the event dispatch between
//! browser clients and the model provider. Requests are acknowledged to
//! the sender, then run in their own task; results are broadcast to every
//! connected client, with failures collapsed to an empty-string payload.

pub mod protocol;
pub mod registry;

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use warp::ws::WebSocket;

use crate::llm::ModelProvider;
use crate::models::{ChatRequest, ImageRequest};

use protocol::{ClientFrame, ServerFrame};
use registry::{ClientId, Clients};

/// Shared state handed to every connection.
#[derive(Clone)]
pub struct GatewayState {
    pub clients: Clients,
    pub provider: Arc<dyn ModelProvider>,
}

impl GatewayState {
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self {
            clients: registry::new_clients(),
            provider,
        }
    }
}

/// Handle one websocket connection from upgrade to close.
pub async fn client_connected(ws: WebSocket, state: GatewayState) {
    let id = registry::next_client_id();
    log::info!("connection, client id {}", id);

    let (mut ws_tx, mut ws_rx) = ws.split();

    // The registry holds the sending half of this channel; a dedicated
    // task pumps the receiving half into the socket.
    let (tx, rx) = mpsc::unbounded_channel();
    let mut rx = UnboundedReceiverStream::new(rx);
    tokio::spawn(async move {
        while let Some(message) = rx.next().await {
            if ws_tx.send(message).await.is_err() {
                break;
            }
        }
    });

    registry::register(&state.clients, id, tx).await;

    // Every connected client hears about the newcomer.
    registry::broadcast(&state.clients, &ServerFrame::greeting()).await;

    while let Some(result) = ws_rx.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                log::warn!("websocket error (client {}): {}", id, e);
                break;
            }
        };
        if let Ok(text) = message.to_str() {
            handle_frame(id, text, &state).await;
        }
    }

    registry::unregister(&state.clients, id).await;
    log::info!("client {} disconnected", id);
}

/// Dispatch one inbound frame.
///
/// The ack goes back to the requester before the provider is called; the
/// call itself runs in its own task, so a slow provider never blocks this
/// client's read loop and any number of requests may be in flight at
/// once. A client that disconnects mid-request does not cancel the call;
/// the eventual broadcast goes to whoever is still connected.
pub async fn handle_frame(id: ClientId, text: &str, state: &GatewayState) {
    let frame: ClientFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => {
            log::warn!("unrecognized frame from client {}: {}", id, e);
            return;
        }
    };

    match frame {
        ClientFrame::ChatRequest { seq, data } => {
            log::info!("chat requested by client {}", id);
            registry::unicast(&state.clients, id, &ServerFrame::chat_ack(seq)).await;
            let state = state.clone();
            tokio::spawn(async move {
                let text = run_chat_request(&state, data).await;
                registry::broadcast(&state.clients, &ServerFrame::chat_response(text)).await;
            });
        }
        ClientFrame::ImageRequest { seq, data } => {
            log::info!("image analysis requested by client {}", id);
            registry::unicast(&state.clients, id, &ServerFrame::image_ack(seq)).await;
            let state = state.clone();
            tokio::spawn(async move {
                let text = run_image_request(&state, data).await;
                registry::broadcast(&state.clients, &ServerFrame::image_response(text)).await;
            });
        }
    }
}

/// Run one chat completion. Any failure, payload or provider, collapses
/// to the empty string the clients will see.
async fn run_chat_request(state: &GatewayState, data: serde_json::Value) -> String {
    let request: ChatRequest = match serde_json::from_value(data) {
        Ok(request) => request,
        Err(e) => {
            log::error!("malformed chat request payload: {}", e);
            return String::new();
        }
    };

    log::info!("making request to the model");
    match state.provider.text_completion(request.into()).await {
        Ok(text) => {
            log::info!("the model answered");
            text
        }
        Err(e) => {
            log::error!("chat completion failed: {}", e);
            String::new()
        }
    }
}

/// Run one image analysis, with the same failure contract as chat.
async fn run_image_request(state: &GatewayState, data: serde_json::Value) -> String {
    let request: ImageRequest = match serde_json::from_value(data) {
        Ok(request) => request,
        Err(e) => {
            log::error!("malformed image request payload: {}", e);
            return String::new();
        }
    };

    log::info!("making request to the model, prompt: {}", request.prompt);
    match state.provider.image_analysis(request.into()).await {
        Ok(text) => {
            log::info!("the model answered");
            text
        }
        Err(e) => {
            log::error!("image analysis failed: {}", e);
            String::new()
        }
    }
}

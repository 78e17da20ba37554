//! Per-connection WebSocket handler.
//!
//! Each session forwards hub events to its client and re-publishes events
//! the client sends, excluding the sender itself from the echo. Framing
//! and heartbeats stay here at the edge; the hub knows nothing about
//! WebSockets.

use std::time::{Duration, Instant};

use actix_web::{web, HttpRequest, HttpResponse};
use actix_ws::{CloseCode, CloseReason, Message, MessageStream, Session};
use tokio::sync::broadcast::error::RecvError;
use tokio::time;
use uuid::Uuid;

use crate::state::AppState;

use super::hub::{ChangeEvent, Envelope, EventHub};

/// Time between heartbeat pings to the client.
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

/// Max idle time before disconnecting the client.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle WebSocket upgrade for the `/ws` endpoint.
pub async fn ws_entry(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    let hub = state.events.clone();
    actix_web::rt::spawn(run_session(hub, session, msg_stream));

    Ok(response)
}

async fn run_session(hub: EventHub, mut session: Session, mut stream: MessageStream) {
    let connection_id = Uuid::new_v4();
    let mut feed = hub.subscribe();
    let mut last_heartbeat = Instant::now();
    let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

    log::info!("websocket client connected: {}", connection_id);

    let close_reason = loop {
        tokio::select! {
            _ = heartbeat.tick() => {
                if Instant::now().duration_since(last_heartbeat) > CLIENT_TIMEOUT {
                    log::info!("websocket client timed out: {}", connection_id);
                    break Some(CloseReason::from(CloseCode::Away));
                }
                if session.ping(b"").await.is_err() {
                    break None;
                }
            }

            envelope = feed.recv() => {
                match envelope {
                    Ok(Envelope { origin, event }) => {
                        // Do not echo a client's own event back to it.
                        if origin == Some(connection_id) {
                            continue;
                        }
                        match serde_json::to_string(&event) {
                            Ok(json) => {
                                if session.text(json).await.is_err() {
                                    break None;
                                }
                            }
                            Err(e) => log::error!("failed to serialize change event: {}", e),
                        }
                    }
                    Err(RecvError::Lagged(missed)) => {
                        log::warn!(
                            "websocket client {} lagged, {} events dropped",
                            connection_id,
                            missed
                        );
                    }
                    Err(RecvError::Closed) => break None,
                }
            }

            message = stream.recv() => {
                match message {
                    Some(Ok(Message::Text(text))) => {
                        last_heartbeat = Instant::now();
                        match serde_json::from_str::<ChangeEvent>(&text) {
                            Ok(event) => hub.publish_from(connection_id, event),
                            Err(e) => log::warn!(
                                "ignoring unparseable client event from {}: {}",
                                connection_id,
                                e
                            ),
                        }
                    }
                    Some(Ok(Message::Ping(bytes))) => {
                        last_heartbeat = Instant::now();
                        if session.pong(&bytes).await.is_err() {
                            break None;
                        }
                    }
                    Some(Ok(Message::Pong(_))) => {
                        last_heartbeat = Instant::now();
                    }
                    Some(Ok(Message::Close(reason))) => break reason,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        log::warn!("websocket protocol error from {}: {}", connection_id, e);
                        break Some(CloseReason::from(CloseCode::Protocol));
                    }
                    None => break None,
                }
            }
        }
    };

    let _ = session.close(close_reason).await;
    log::info!("websocket client disconnected: {}", connection_id);
}

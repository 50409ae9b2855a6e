//! Real-time notification channels for admin dashboards

use std::{convert::Infallible, time::Duration};

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{
        sse::{Event, KeepAlive, Sse},
        Response,
    },
    Json,
};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_stream::{
    wrappers::{errors::BroadcastStreamRecvError, BroadcastStream},
    Stream, StreamExt,
};
use uuid::Uuid;

use super::{AdminUser, StreamAdmin};
use crate::{
    error::AppResult,
    models::report::NotificationCounts,
    services::notifier::Notification,
    AppState,
};

/// WebSocket feed; every event is one JSON text frame
#[utoipa::path(
    get,
    path = "/ws",
    tag = "notifications",
    params(("token" = Option<String>, Query, description = "Admin token when no Authorization header can be sent")),
    responses(
        (status = 101, description = "Switching to WebSocket", body = Notification),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn websocket(
    State(state): State<AppState>,
    StreamAdmin(claims): StreamAdmin,
    ws: WebSocketUpgrade,
) -> Response {
    let rx = state.services.notifier.subscribe();
    let user_id = claims.user_id();
    ws.on_upgrade(move |socket| forward_to_socket(socket, rx, user_id))
}

async fn forward_to_socket(mut socket: WebSocket, mut rx: broadcast::Receiver<Notification>, user_id: Uuid) {
    tracing::info!(%user_id, "Dashboard connected over WebSocket");

    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(notification) => {
                    let text = match serde_json::to_string(&notification) {
                        Ok(t) => t,
                        Err(e) => {
                            tracing::error!("Failed to encode notification: {}", e);
                            continue;
                        }
                    };
                    if socket.send(Message::Text(text)).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(%user_id, skipped, "WebSocket subscriber lagged, events dropped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                // Client frames carry nothing we act on
                Some(Ok(_)) => {}
            },
        }
    }

    tracing::info!(%user_id, "Dashboard WebSocket disconnected");
}

/// Server-Sent Events feed; the SSE event name is the notification name
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    tag = "notifications",
    params(("token" = Option<String>, Query, description = "Admin token when no Authorization header can be sent")),
    responses(
        (status = 200, description = "text/event-stream of notifications", body = Notification),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn event_stream(
    State(state): State<AppState>,
    StreamAdmin(claims): StreamAdmin,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let user_id = claims.user_id();
    tracing::info!(%user_id, "Dashboard subscribed to event stream");

    let stream = BroadcastStream::new(state.services.notifier.subscribe()).filter_map(move |received| {
        match received {
            Ok(notification) => match Event::default()
                .event(notification.event.as_str())
                .json_data(&notification)
            {
                Ok(event) => Some(Ok(event)),
                Err(e) => {
                    tracing::error!("Failed to encode notification: {}", e);
                    None
                }
            },
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(%user_id, skipped, "SSE subscriber lagged, events dropped");
                None
            }
        }
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new().interval(Duration::from_secs(state.config.realtime.keep_alive_secs.max(1))),
    )
}

/// Badge counters for reconciling the dashboard on load
#[utoipa::path(
    get,
    path = "/api/notifications/counts",
    tag = "notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current counts", body = NotificationCounts)
    )
)]
pub async fn counts(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<NotificationCounts>> {
    Ok(Json(state.services.reports.counts().await?))
}

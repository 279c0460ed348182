//! services/api/src/web/ws_handler.rs
//!
//! This is the main entry point and control loop for a WebSocket
//! connection. Every client frame is one user event; it is applied to the
//! shared session under its lock and answered with fresh view state.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use study_spots_core::notifications::Notification;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::web::{
    assistant_task, notify_task,
    protocol::{ClientMessage, NavTarget, ServerMessage},
    state::{AppState, Outbox},
    view::view_model,
};

/// The handler for upgrading HTTP requests to WebSocket connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(app_state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

async fn handle_socket(socket: WebSocket, app_state: Arc<AppState>) {
    info!("New WebSocket connection established.");

    let (mut sender, mut receiver) = socket.split();
    let (outbox, mut outbox_rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Writer task: serializes outgoing messages onto the socket so the
    // dispatch loop and background workers can all push concurrently.
    let writer = tokio::spawn(async move {
        while let Some(msg) = outbox_rx.recv().await {
            let json = serde_json::to_string(&msg).unwrap();
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Initial render of whatever state the session is in.
    {
        let session = app_state.session.lock().await;
        let _ = outbox.send(ServerMessage::ViewState {
            active_tab: NavTarget::from_view(session.active_tab()),
            model: view_model(&session),
        });
    }

    while let Some(Ok(frame)) = receiver.next().await {
        match frame {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(msg) => handle_client_message(&app_state, &outbox, msg).await,
                Err(e) => {
                    warn!("Ignoring malformed client frame: {}", e);
                    let _ = outbox.send(ServerMessage::Error {
                        message: format!("Malformed message: {}", e),
                    });
                }
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    drop(outbox);
    let _ = writer.await;
    info!("WebSocket connection closed.");
}

/// Applies one client message to the session and pushes the results.
pub(crate) async fn handle_client_message(
    app_state: &Arc<AppState>,
    outbox: &Outbox,
    msg: ClientMessage,
) {
    match msg {
        ClientMessage::Navigate { view } => {
            let mut session = app_state.session.lock().await;
            session.navigate(view.to_view());
            push_view_state(&session, outbox);
        }
        ClientMessage::SelectSpot { spot_id } => {
            let mut session = app_state.session.lock().await;
            session.select_spot(&spot_id);
            push_view_state(&session, outbox);
        }
        ClientMessage::Back => {
            let mut session = app_state.session.lock().await;
            session.back();
            push_view_state(&session, outbox);
        }
        ClientMessage::SetQuery { query } => {
            let mut session = app_state.session.lock().await;
            session.set_query(query);
            push_view_state(&session, outbox);
        }
        ClientMessage::SetFilters { filters } => {
            let mut session = app_state.session.lock().await;
            session.set_criteria(filters.to_domain());
            push_view_state(&session, outbox);
        }
        ClientMessage::ResetFilters => {
            let mut session = app_state.session.lock().await;
            session.reset_filters();
            push_view_state(&session, outbox);
        }
        ClientMessage::ToggleFavorite => {
            let notification = {
                let mut session = app_state.session.lock().await;
                let notification = session
                    .toggle_favorite()
                    .and_then(|id| session.notification(id).cloned());
                push_view_state(&session, outbox);
                notification
            };
            if let Some(notification) = notification {
                announce(app_state, outbox, notification).await;
            }
        }
        ClientMessage::ToggleVisited => {
            let notification = {
                let mut session = app_state.session.lock().await;
                let notification = session
                    .toggle_visited()
                    .and_then(|id| session.notification(id).cloned());
                push_view_state(&session, outbox);
                notification
            };
            if let Some(notification) = notification {
                announce(app_state, outbox, notification).await;
            }
        }
        ClientMessage::AddReview {
            spot_id,
            rating,
            comment,
        } => {
            let notification = {
                let mut session = app_state.session.lock().await;
                let notification = session
                    .add_review(&spot_id, rating, &comment)
                    .and_then(|id| session.notification(id).cloned());
                push_view_state(&session, outbox);
                notification
            };
            if let Some(notification) = notification {
                announce(app_state, outbox, notification).await;
            }
        }
        ClientMessage::ReportCrowd { spot_id, level } => {
            let notification = {
                let mut session = app_state.session.lock().await;
                let notification = session
                    .update_crowd_level(&spot_id, level.into())
                    .and_then(|id| session.notification(id).cloned());
                push_view_state(&session, outbox);
                notification
            };
            if let Some(notification) = notification {
                announce(app_state, outbox, notification).await;
            }
        }
        ClientMessage::AskAssistant { query } => {
            let query = query.trim().to_string();
            let accepted = {
                let mut session = app_state.session.lock().await;
                let accepted = session.ask_assistant(&query);
                push_view_state(&session, outbox);
                accepted
            };
            if accepted {
                tokio::spawn(assistant_task::recommend_process(
                    app_state.clone(),
                    outbox.clone(),
                    query,
                ));
            }
        }
        ClientMessage::DismissNotification { id } => {
            {
                let mut session = app_state.session.lock().await;
                session.dismiss_notification(id);
            }
            if let Some(token) = app_state.expiry_timers.lock().await.remove(&id) {
                token.cancel();
            }
            let _ = outbox.send(ServerMessage::NotificationExpired { id });
        }
    }
}

/// Pushes the view model for the session's current view.
fn push_view_state(session: &study_spots_core::session::StudySession, outbox: &Outbox) {
    let _ = outbox.send(ServerMessage::ViewState {
        active_tab: NavTarget::from_view(session.active_tab()),
        model: view_model(session),
    });
}

/// Tells the client about a fresh notification and schedules its expiry.
async fn announce(app_state: &Arc<AppState>, outbox: &Outbox, notification: Notification) {
    let _ = outbox.send(ServerMessage::Notification {
        id: notification.id,
        message: notification.message.clone(),
        severity: notification.severity.into(),
    });
    let _ = notify_task::schedule_expiry(app_state.clone(), outbox.clone(), notification.id).await;
}

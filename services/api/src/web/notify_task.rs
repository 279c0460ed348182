//! services/api/src/web/notify_task.rs
//!
//! The delayed-removal worker behind notification expiry: one scheduled
//! task per notification, keyed and cancellable by the notification id.

use std::sync::Arc;
use std::time::Duration;

use study_spots_core::notifications::NOTIFICATION_TTL_MS;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::web::protocol::ServerMessage;
use crate::web::state::{AppState, Outbox};

/// Registers an expiry timer for `id` and spawns the worker.
///
/// An explicit dismissal cancels the timer through the registry; if the
/// timer wins the race instead, it removes the notification itself and
/// tells the client.
pub async fn schedule_expiry(app_state: Arc<AppState>, outbox: Outbox, id: Uuid) -> JoinHandle<()> {
    let token = CancellationToken::new();
    app_state
        .expiry_timers
        .lock()
        .await
        .insert(id, token.clone());
    tokio::spawn(run_expiry(app_state, outbox, id, token))
}

/// Sleeps out the display window, then removes the notification unless
/// the token was cancelled by an explicit dismissal first. Queue removal
/// is idempotent, so a late fire against an already-dismissed id is
/// harmless.
async fn run_expiry(app_state: Arc<AppState>, outbox: Outbox, id: Uuid, token: CancellationToken) {
    tokio::select! {
        _ = token.cancelled() => {}
        _ = tokio::time::sleep(Duration::from_millis(NOTIFICATION_TTL_MS)) => {
            {
                let mut session = app_state.session.lock().await;
                session.dismiss_notification(id);
            }
            app_state.expiry_timers.lock().await.remove(&id);
            let _ = outbox.send(ServerMessage::NotificationExpired { id });
        }
    }
}

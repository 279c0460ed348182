//! services/api/src/web/state.rs
//!
//! Defines the application's shared state: the composition root that owns
//! every store for the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use study_spots_core::ports::RecommendationService;
use study_spots_core::session::StudySession;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::config::Config;
use crate::web::protocol::ServerMessage;

/// Outgoing half of a client connection. Worker tasks push server
/// messages here; a writer task serializes them onto the socket.
pub type Outbox = mpsc::UnboundedSender<ServerMessage>;

/// The shared application state, created once at startup and passed to all handlers.
///
/// There is exactly one user and one session; every connection and every
/// background task operates on the same stores through the session lock.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// None when no credential is configured; the assistant then degrades
    /// to a fixed reply without calling out.
    pub recommender: Option<Arc<dyn RecommendationService>>,
    /// The single-user session owning catalog, user state, navigation,
    /// search state, notifications, and the assistant transcript.
    pub session: Arc<Mutex<StudySession>>,
    /// Pending expiry timers keyed by notification id. An explicit
    /// dismissal cancels its timer here; a timer that already fired just
    /// removes its own key.
    pub expiry_timers: Arc<Mutex<HashMap<Uuid, CancellationToken>>>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        recommender: Option<Arc<dyn RecommendationService>>,
        session: StudySession,
    ) -> Self {
        Self {
            config,
            recommender,
            session: Arc::new(Mutex::new(session)),
            expiry_timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

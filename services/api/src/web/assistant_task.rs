//! services/api/src/web/assistant_task.rs
//!
//! The asynchronous worker resolving one assistant recommendation
//! request. Whatever happens out there, the conversation always ends up
//! resolved: the pending flag never survives this task.

use std::sync::Arc;

use study_spots_core::domain::Spot;
use tracing::{error, info};

use crate::web::protocol::{NavTarget, ServerMessage};
use crate::web::state::{AppState, Outbox};
use crate::web::view::view_model;

/// Reply when no credential is configured. Returned without touching the
/// catalog or the network.
pub const MISSING_KEY_REPLY: &str = "API Key is missing. Please check your configuration.";

/// Reply when the external call fails for any reason.
pub const APOLOGY_REPLY: &str = "Sorry, I'm having trouble connecting to the campus network \
right now. Please try again later.";

/// Resolves one recommendation request and pushes the outcome.
///
/// The session lock is held only to snapshot the catalog and to record
/// the resolution, never across the external call, so every other view
/// stays responsive while the assistant is thinking.
pub async fn recommend_process(app_state: Arc<AppState>, outbox: Outbox, query: String) {
    let reply = match &app_state.recommender {
        None => MISSING_KEY_REPLY.to_string(),
        Some(recommender) => {
            let spots: Vec<Spot> = {
                let session = app_state.session.lock().await;
                session.catalog().spots().to_vec()
            };
            match recommender.recommend(&query, &spots).await {
                Ok(text) => {
                    info!("Recommendation resolved for query: '{}'", query);
                    text
                }
                Err(e) => {
                    error!("Recommendation request failed: {}", e);
                    APOLOGY_REPLY.to_string()
                }
            }
        }
    };

    let (active_tab, model) = {
        let mut session = app_state.session.lock().await;
        session.resolve_assistant(reply.clone());
        (NavTarget::from_view(session.active_tab()), view_model(&session))
    };

    let _ = outbox.send(ServerMessage::AssistantReply { text: reply });
    let _ = outbox.send(ServerMessage::ViewState { active_tab, model });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::seed::seed_spots;
    use async_trait::async_trait;
    use study_spots_core::ports::{PortError, PortResult, RecommendationService};
    use study_spots_core::session::StudySession;
    use tokio::sync::mpsc;

    struct CannedRecommender(PortResult<String>);

    #[async_trait]
    impl RecommendationService for CannedRecommender {
        async fn recommend(&self, _query: &str, _spots: &[Spot]) -> PortResult<String> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(PortError::Unexpected(e.to_string())),
            }
        }
    }

    fn app_state(recommender: Option<Arc<dyn RecommendationService>>) -> Arc<AppState> {
        let config = Arc::new(Config {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            log_level: tracing::Level::INFO,
            openai_api_key: None,
            recommend_model: "gpt-4o-mini".to_string(),
        });
        Arc::new(AppState::new(
            config,
            recommender,
            StudySession::new(seed_spots()),
        ))
    }

    async fn last_assistant_reply(app_state: &Arc<AppState>) -> String {
        let session = app_state.session.lock().await;
        session.conversation().messages().last().unwrap().text.clone()
    }

    #[tokio::test]
    async fn missing_credential_degrades_without_a_call() {
        let app_state = app_state(None);
        let (outbox, mut rx) = mpsc::unbounded_channel();

        {
            let mut session = app_state.session.lock().await;
            assert!(session.ask_assistant("quiet place with outlets"));
        }
        recommend_process(app_state.clone(), outbox, "quiet place with outlets".to_string()).await;

        assert_eq!(last_assistant_reply(&app_state).await, MISSING_KEY_REPLY);
        assert!(!app_state.session.lock().await.conversation().is_pending());

        match rx.recv().await {
            Some(ServerMessage::AssistantReply { text }) => assert_eq!(text, MISSING_KEY_REPLY),
            other => panic!("expected an AssistantReply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn a_failing_adapter_degrades_to_the_apology() {
        let recommender: Arc<dyn RecommendationService> = Arc::new(CannedRecommender(Err(
            PortError::Unexpected("quota exceeded".to_string()),
        )));
        let app_state = app_state(Some(recommender));
        let (outbox, _rx) = mpsc::unbounded_channel();

        {
            let mut session = app_state.session.lock().await;
            assert!(session.ask_assistant("busy cafe"));
        }
        recommend_process(app_state.clone(), outbox, "busy cafe".to_string()).await;

        assert_eq!(last_assistant_reply(&app_state).await, APOLOGY_REPLY);
        assert!(!app_state.session.lock().await.conversation().is_pending());
    }

    #[tokio::test]
    async fn a_successful_call_lands_in_the_transcript() {
        let recommender: Arc<dyn RecommendationService> = Arc::new(CannedRecommender(Ok(
            "Try the Central Library for quiet study.".to_string(),
        )));
        let app_state = app_state(Some(recommender));
        let (outbox, _rx) = mpsc::unbounded_channel();

        {
            let mut session = app_state.session.lock().await;
            assert!(session.ask_assistant("somewhere quiet"));
        }
        recommend_process(app_state.clone(), outbox, "somewhere quiet".to_string()).await;

        assert_eq!(
            last_assistant_reply(&app_state).await,
            "Try the Central Library for quiet study."
        );
        // A new request is accepted once the previous one resolved.
        assert!(app_state
            .session
            .lock()
            .await
            .ask_assistant("and with coffee?"));
    }
}

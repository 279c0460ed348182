//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST read API and the master
//! definition for the OpenAPI specification. Reads consult the same live
//! session the WebSocket protocol mutates.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use utoipa::OpenApi;

use crate::web::state::AppState;
use crate::web::view::{
    CrowdLevelDto, FilterPayload, NoiseLevelDto, ReviewPayload, SpotPayload, SpotTypeDto,
};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_spots_handler,
        get_spot_handler,
    ),
    components(
        schemas(SpotPayload, ReviewPayload, FilterPayload, SpotTypeDto, NoiseLevelDto, CrowdLevelDto)
    ),
    tags(
        (name = "Campus Study Spots API", description = "Read endpoints for the study spot catalog.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List the full catalog in catalog order.
#[utoipa::path(
    get,
    path = "/spots",
    responses(
        (status = 200, description = "The current catalog", body = Vec<SpotPayload>)
    )
)]
pub async fn list_spots_handler(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = app_state.session.lock().await;
    let spots: Vec<SpotPayload> = session
        .catalog()
        .spots()
        .iter()
        .map(SpotPayload::from_domain)
        .collect();
    Json(spots)
}

/// Fetch a single spot by id.
#[utoipa::path(
    get,
    path = "/spots/{id}",
    params(
        ("id" = String, Path, description = "The spot id")
    ),
    responses(
        (status = 200, description = "The spot", body = SpotPayload),
        (status = 404, description = "No spot with that id")
    )
)]
pub async fn get_spot_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SpotPayload>, (StatusCode, String)> {
    let session = app_state.session.lock().await;
    match session.catalog().get(&id) {
        Some(spot) => Ok(Json(SpotPayload::from_domain(spot))),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("No spot with id '{}'", id),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::seed::seed_spots;
    use study_spots_core::session::StudySession;

    fn test_app_state() -> Arc<AppState> {
        let config = Arc::new(Config {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            log_level: tracing::Level::INFO,
            openai_api_key: None,
            recommend_model: "gpt-4o-mini".to_string(),
        });
        Arc::new(AppState::new(config, None, StudySession::new(seed_spots())))
    }

    #[tokio::test]
    async fn get_spot_returns_404_for_an_unknown_id() {
        let result = get_spot_handler(
            State(test_app_state()),
            Path("missing-id".to_string()),
        )
        .await;
        match result {
            Err((status, _)) => assert_eq!(status, StatusCode::NOT_FOUND),
            Ok(_) => panic!("expected a 404"),
        }
    }

    #[tokio::test]
    async fn get_spot_returns_the_projection() {
        let result = get_spot_handler(State(test_app_state()), Path("1".to_string())).await;
        let Json(spot) = result.expect("seeded spot should resolve");
        assert_eq!(spot.id, "1");
        assert!(!spot.reviews.is_empty());
    }
}

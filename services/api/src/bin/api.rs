//! services/api/src/bin/api.rs

use std::sync::Arc;

use api_lib::{
    adapters::OpenAiRecommendAdapter,
    config::Config,
    error::ApiError,
    seed,
    web::{get_spot_handler, list_spots_handler, rest::ApiDoc, state::AppState, ws_handler},
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use study_spots_core::{ports::RecommendationService, session::StudySession};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize the Recommendation Adapter ---
    // The credential is optional: without it the assistant degrades to a
    // fixed reply and the rest of the application is fully usable.
    let recommender: Option<Arc<dyn RecommendationService>> = match &config.openai_api_key {
        Some(key) => {
            let openai_config = OpenAIConfig::new().with_api_key(key);
            let client = Client::with_config(openai_config);
            Some(Arc::new(OpenAiRecommendAdapter::new(
                client,
                config.recommend_model.clone(),
            )))
        }
        None => {
            warn!("OPENAI_API_KEY not set; assistant recommendations run degraded.");
            None
        }
    };

    // --- 3. Build the Shared AppState over the Seed Catalog ---
    let session = StudySession::new(seed::seed_spots());
    let app_state = Arc::new(AppState::new(config.clone(), recommender, session));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    // --- 4. Create the Web Router ---
    let api_router = Router::new()
        .route("/spots", get(list_spots_handler))
        .route("/spots/{id}", get(get_spot_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

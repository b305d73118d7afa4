use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{
    generation::GenerationController, geo, health, history::HistoryController,
    voices::VoiceController,
};
use crate::infrastructure::auth::{auth_middleware, optional_auth_middleware, request_id_middleware};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

/// Controllers wired into the router
pub struct Controllers {
    pub voice: Arc<VoiceController>,
    pub generation: Arc<GenerationController>,
    pub history: Arc<HistoryController>,
}

/// Build the application router with all routes configured
pub fn build_router(pool: Arc<DbPool>, config: Arc<Config>, controllers: Controllers) -> Router {
    // Catalog routes (public)
    let voice_routes = Router::new()
        .route("/api/voices", get(VoiceController::list_voices))
        .route("/api/voices/:voiceId", get(VoiceController::get_voice))
        .with_state(controllers.voice);

    // Provider voice listing (public, key stays server-side)
    let provider_routes = Router::new()
        .route("/api/voices/provider", get(GenerationController::list_provider_voices))
        .with_state(controllers.generation.clone());

    // Generation (anonymous allowed, a session is required to save)
    let generation_routes = Router::new()
        .route("/api/generate", post(GenerationController::generate))
        .with_state(controllers.generation)
        .layer(middleware::from_fn_with_state(
            config.clone(),
            optional_auth_middleware,
        ));

    // History (requires authentication)
    let history_routes = Router::new()
        .route("/api/user/history", get(HistoryController::get_history))
        .with_state(controllers.history)
        .layer(middleware::from_fn_with_state(config.clone(), auth_middleware));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .route("/api/geo", get(geo::get_geo))
        .merge(voice_routes)
        .merge(provider_routes)
        .merge(generation_routes)
        .merge(history_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

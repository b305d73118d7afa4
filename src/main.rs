use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use decible_backend::controllers::{
    generation::GenerationController, history::HistoryController, voices::VoiceController,
};
use decible_backend::domain::{
    generation::GenerationService, history::HistoryService, voice::VoiceCatalogService,
};
use decible_backend::infrastructure::backend::BackendClients;
use decible_backend::infrastructure::config::{Config, LogFormat};
use decible_backend::infrastructure::http::{build_router, start_http_server, Controllers};
use decible_backend::infrastructure::repositories::{
    ElevenLabsSpeechRepository, PgHistoryRepository, StaticVoiceCatalogRepository,
    SupabaseStorageRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Decible Backend on {}:{}",
        config.host,
        config.port
    );

    // Credentials are checked where they are used; only warn here
    if config.elevenlabs_api_key.is_none() {
        tracing::warn!("ELEVENLABS_API_KEY is not set; generation requests will fail");
    }
    if config.storage_url.is_none() || config.storage_service_key.is_none() {
        tracing::warn!("Object storage is not configured; saving generations will fail");
    }
    if !config.is_development() && config.jwt_audience.is_none() {
        tracing::warn!("JWT_AUDIENCE is not set; session token audience is not checked");
    }

    // Backend connections, created once and shared by every request
    let clients = BackendClients::connect(&config).await?;
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    tracing::info!("Instantiating repositories...");
    let voice_catalog_repo = Arc::new(StaticVoiceCatalogRepository::new());
    let history_repo = Arc::new(PgHistoryRepository::new(clients.pool.clone()));
    let speech_repo = Arc::new(ElevenLabsSpeechRepository::new(
        clients.http_client.clone(),
        config.elevenlabs_base_url.clone(),
        config.elevenlabs_api_key.clone(),
        config.elevenlabs_model_id.clone(),
    ));
    let storage_repo = Arc::new(SupabaseStorageRepository::new(
        clients.http_client.clone(),
        config.storage_url.clone(),
        config.storage_service_key.clone(),
        config.storage_bucket.clone(),
    ));

    // 2. Services
    tracing::info!("Instantiating services...");
    let catalog_service = Arc::new(VoiceCatalogService::new(voice_catalog_repo));
    let generation_service = Arc::new(GenerationService::new(
        speech_repo,
        storage_repo,
        history_repo.clone(),
    ));
    let history_service = Arc::new(HistoryService::new(history_repo));

    tracing::info!(
        voices = catalog_service.query(&Default::default()).total_all,
        languages = catalog_service.facets().languages.len(),
        "Voice catalog loaded"
    );

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let controllers = Controllers {
        voice: Arc::new(VoiceController::new(catalog_service)),
        generation: Arc::new(GenerationController::new(generation_service)),
        history: Arc::new(HistoryController::new(history_service)),
    };

    let app = build_router(clients.pool.clone(), config.clone(), controllers);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "decible_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

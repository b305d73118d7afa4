use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::{check_connection, create_pool, DbPool};

/// Connections to the managed backend and the speech provider.
///
/// Built exactly once at startup and shared by reference with every
/// repository; nothing in request handling creates its own client.
#[derive(Clone)]
pub struct BackendClients {
    pub pool: Arc<DbPool>,
    pub http_client: reqwest::Client,
}

impl BackendClients {
    pub async fn connect(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = create_pool(&config.database_url, config.db_max_connections).await?;
        tracing::info!(
            max_connections = config.db_max_connections,
            "Database connection pool created"
        );

        check_connection(&pool).await?;
        tracing::info!("Database connection verified");

        let http_client = build_http_client(config)?;

        Ok(Self {
            pool: Arc::new(pool),
            http_client,
        })
    }
}

/// Outbound HTTP client shared by the provider and storage repositories
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.provider_timeout_secs))
        .user_agent(concat!("decible-backend/", env!("CARGO_PKG_VERSION")))
        .build()
}

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("object storage not configured: {0}")]
    NotConfigured(String),
    #[error("upload request failed: {0}")]
    Request(String),
    #[error("object storage returned {status}: {body}")]
    Upstream { status: u16, body: String },
}

/// Object storage for generated audio
#[async_trait]
pub trait AudioStorageRepository: Send + Sync {
    /// Upload `data` under `key` and return its public URL
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<String, StorageError>;
}

/// Supabase-style storage REST API
pub struct SupabaseStorageRepository {
    http_client: reqwest::Client,
    base_url: Option<String>,
    service_key: Option<String>,
    bucket: String,
}

impl SupabaseStorageRepository {
    pub fn new(
        http_client: reqwest::Client,
        base_url: Option<String>,
        service_key: Option<String>,
        bucket: String,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            service_key,
            bucket,
        }
    }

    fn credentials(&self) -> Result<(&str, &str), StorageError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| StorageError::NotConfigured("STORAGE_URL is not set".to_string()))?;
        let service_key = self.service_key.as_deref().ok_or_else(|| {
            StorageError::NotConfigured("STORAGE_SERVICE_KEY is not set".to_string())
        })?;
        Ok((base_url, service_key))
    }

    fn object_url(&self, base_url: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", base_url, self.bucket, encode_key(key))
    }

    fn public_url(&self, base_url: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            base_url,
            self.bucket,
            encode_key(key)
        )
    }
}

/// Percent-encode each path segment but keep the `/` separators
fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl AudioStorageRepository for SupabaseStorageRepository {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<String, StorageError> {
        let (base_url, service_key) = self.credentials()?;
        let size = data.len();

        let response = self
            .http_client
            .post(self.object_url(base_url, key))
            .bearer_auth(service_key)
            .header("apikey", service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(data)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::Upstream { status, body });
        }

        tracing::info!(bucket = %self.bucket, key = key, size_bytes = size, "Audio uploaded");

        Ok(self.public_url(base_url, key))
    }
}

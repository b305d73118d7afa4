use crate::domain::geo::{GeoLookup, GeoLookupError, GeoResponse};
use async_trait::async_trait;

/// Calls this service's own GET /api/geo endpoint
pub struct HttpGeoLookup {
    http_client: reqwest::Client,
    geo_url: String,
}

impl HttpGeoLookup {
    pub fn new(http_client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            http_client,
            geo_url: format!("{}/api/geo", api_base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl GeoLookup for HttpGeoLookup {
    async fn country(&self) -> Result<String, GeoLookupError> {
        let response = self
            .http_client
            .get(&self.geo_url)
            .send()
            .await
            .map_err(|e| GeoLookupError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeoLookupError(format!(
                "geo endpoint returned {}",
                response.status()
            )));
        }

        let body: GeoResponse = response
            .json()
            .await
            .map_err(|e| GeoLookupError(e.to_string()))?;

        Ok(body.country)
    }
}

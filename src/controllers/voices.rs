use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::voice::{QueryFilters, VoiceCatalogService, VoiceQueryResult, VoiceView},
    error::{AppError, AppResult},
};

/// Query parameters for GET /api/voices, as sent by the client
#[derive(Debug, Default)]
pub struct VoiceQueryParams {
    pub category: Option<String>,
    pub language: Option<String>,
    pub use_case: Option<String>,
    pub search: Option<String>,
}

impl VoiceQueryParams {
    /// Collect known parameters from raw query pairs. The first occurrence of
    /// a key wins; unknown keys are skipped, so one bad parameter never
    /// discards the others.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut params.category,
                "language" => &mut params.language,
                "useCase" => &mut params.use_case,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

impl From<VoiceQueryParams> for QueryFilters {
    fn from(params: VoiceQueryParams) -> Self {
        QueryFilters::from_raw(
            params.category.as_deref(),
            params.language.as_deref(),
            params.use_case.as_deref(),
            params.search.as_deref(),
        )
    }
}

pub struct VoiceController {
    catalog_service: Arc<VoiceCatalogService>,
}

impl VoiceController {
    pub fn new(catalog_service: Arc<VoiceCatalogService>) -> Self {
        Self { catalog_service }
    }

    /// GET /api/voices - Filtered catalog plus facets for the whole catalog.
    /// Parameters are read one by one; an unusable value only drops its own filter.
    pub async fn list_voices(
        State(controller): State<Arc<VoiceController>>,
        query: Option<Query<Vec<(String, String)>>>,
    ) -> Json<VoiceQueryResult> {
        let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
        let filters = QueryFilters::from(VoiceQueryParams::from_pairs(pairs));

        Json(controller.catalog_service.query(&filters))
    }

    /// GET /api/voices/:voiceId - Single catalog entry
    pub async fn get_voice(
        State(controller): State<Arc<VoiceController>>,
        Path(voice_id): Path<String>,
    ) -> AppResult<Json<VoiceView>> {
        controller
            .catalog_service
            .find(&voice_id)
            .map(Json)
            .ok_or_else(|| AppError::NotFound(format!("Voice {}", voice_id)))
    }
}

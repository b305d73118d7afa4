use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    domain::generation::{
        GenerationRequest, GenerationService, GenerationServiceApi, GenerationServiceError,
        ProviderVoicesResponse, AUDIO_CONTENT_TYPE,
    },
    error::{AppError, AppResult},
    infrastructure::auth::AuthUser,
};

pub const X_CHARACTER_COUNT: &str = "x-character-count";

pub struct GenerationController {
    generation_service: Arc<GenerationService>,
}

impl GenerationController {
    pub fn new(generation_service: Arc<GenerationService>) -> Self {
        Self { generation_service }
    }

    /// POST /api/generate - Convert text to speech.
    ///
    /// Returns MPEG audio by default. With `save: true` the audio is uploaded
    /// for the signed-in user and a JSON body with its public URL is returned.
    pub async fn generate(
        State(controller): State<Arc<GenerationController>>,
        auth_user: Option<Extension<AuthUser>>,
        payload: Result<Json<GenerationRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(request) = payload.map_err(|rejection| {
            AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        let save = request.save;
        let input = request.validate()?;

        if save {
            let Extension(auth_user) = auth_user.ok_or_else(|| {
                AppError::Unauthorized("Sign in to save generations".to_string())
            })?;

            let stored = controller
                .generation_service
                .generate_and_store(auth_user.user_id, input)
                .await?;

            return Ok((StatusCode::OK, Json(stored)).into_response());
        }

        let generated = controller.generation_service.generate(input).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_CONTENT_TYPE));
        headers.insert(X_CHARACTER_COUNT, HeaderValue::from(generated.char_count));

        Ok((StatusCode::OK, headers, Body::from(generated.audio_data)).into_response())
    }

    /// GET /api/voices/provider - Voices available at the speech provider
    pub async fn list_provider_voices(
        State(controller): State<Arc<GenerationController>>,
    ) -> AppResult<Json<ProviderVoicesResponse>> {
        // Nothing is generated here, so provider failures get the generic message
        let voices = controller
            .generation_service
            .list_provider_voices()
            .await
            .map_err(|e| match e {
                GenerationServiceError::Provider(msg) => {
                    AppError::Internal(format!("Provider voice listing failed: {}", msg))
                }
                other => AppError::from(other),
            })?;
        Ok(Json(ProviderVoicesResponse { voices }))
    }
}

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::{domain::auth::JwtManager, error::AppError};
use uuid::Uuid;

/// User context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// Authentication middleware for routes that require a session.
///
/// Only the token is checked; the database is never consulted, so an
/// unauthenticated request stops here.
pub async fn auth_middleware(
    State(config): State<Arc<Config>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let auth_user = authenticate(&config, auth_header)?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Like [`auth_middleware`] but lets anonymous requests through.
///
/// A header that is present but invalid is still rejected.
pub async fn optional_auth_middleware(
    State(config): State<Arc<Config>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| {
            v.to_str()
                .map(str::to_string)
                .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))
        })
        .transpose()?;

    if let Some(auth_header) = auth_header {
        let auth_user = authenticate(&config, &auth_header)?;
        request.extensions_mut().insert(auth_user);
    }

    Ok(next.run(request).await)
}

fn authenticate(config: &Config, auth_header: &str) -> Result<AuthUser, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let jwt_manager = JwtManager::new(config.jwt_secret.clone(), config.jwt_audience.clone());
    let claims = jwt_manager.validate_token(token)?;
    let user_id = claims.user_id()?;

    Ok(AuthUser {
        user_id,
        email: claims.email,
    })
}

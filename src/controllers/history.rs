use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::history::{HistoryResponse, HistoryService, HistoryServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

pub struct HistoryController {
    history_service: Arc<HistoryService>,
}

impl HistoryController {
    pub fn new(history_service: Arc<HistoryService>) -> Self {
        Self { history_service }
    }

    /// GET /api/user/history - Recent generations of the signed-in user
    pub async fn get_history(
        State(controller): State<Arc<HistoryController>>,
        Extension(auth_user): Extension<AuthUser>,
        query: Option<Query<HistoryQuery>>,
    ) -> AppResult<Json<HistoryResponse>> {
        // An unparseable limit falls back to the default
        let limit = query.and_then(|Query(query)| query.limit);

        let history = controller
            .history_service
            .get_history(auth_user.user_id, limit)
            .await?;

        Ok(Json(HistoryResponse { history }))
    }
}

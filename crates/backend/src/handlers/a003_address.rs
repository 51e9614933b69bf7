use axum::{extract::Query, http::StatusCode, Json};
use serde::Deserialize;

use super::{session_error, ApiError};
use crate::shared::data::session;

const DEFAULT_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

/// GET /api/addresses?q=&limit=
pub async fn suggest(Query(query): Query<SuggestQuery>) -> Result<Json<Vec<String>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let addresses = session::with_app(|app| app.address_suggestions(&query.q, limit))
        .map_err(session_error)?;
    Ok(Json(addresses))
}

/// DELETE /api/addresses
pub async fn clear_history() -> Result<StatusCode, ApiError> {
    session::with_app(|app| app.clear_address_history()).map_err(session_error)?;
    tracing::info!("Address history cleared");
    Ok(StatusCode::NO_CONTENT)
}

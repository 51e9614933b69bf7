use axum::{http::StatusCode, Json};
use serde::Deserialize;

use contracts::domain::a004_agent::AgentRoster;

use super::{api_error, session_error, ApiError};
use crate::shared::data::session;

#[derive(Debug, Deserialize)]
pub struct SaveAgentsRequest {
    pub agents: Vec<String>,
}

/// GET /api/agents
pub async fn list_all() -> Result<Json<Vec<String>>, ApiError> {
    let agents = session::with_app(|app| app.agents().to_vec()).map_err(session_error)?;
    Ok(Json(agents))
}

/// PUT /api/agents
///
/// Список заменяется целиком; пустые имена, дубли и пустой список отклоняются.
pub async fn save(Json(req): Json<SaveAgentsRequest>) -> Result<Json<Vec<String>>, ApiError> {
    let roster = AgentRoster::from_names(&req.agents)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e))?;

    let agents = session::with_app(|app| app.save_agents(roster))
        .map_err(session_error)?
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e))?;
    Ok(Json(agents))
}

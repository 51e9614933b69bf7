use std::path::PathBuf;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use contracts::domain::a002_order::GridRowView;
use contracts::enums::OrderStatus;

use super::{api_error, session_error, ApiError};
use crate::domain::a002_order::order_grid::GridError;
use crate::shared::data::session;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Deserialize)]
pub struct EditCellRequest {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub ids: Vec<Uuid>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub statuses: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileRequest {
    pub path: String,
}

fn grid_error(e: GridError) -> ApiError {
    let status = match e {
        GridError::RowNotFound(_) => StatusCode::NOT_FOUND,
        GridError::NoSelection | GridError::UnknownColumn(_) => StatusCode::BAD_REQUEST,
    };
    api_error(status, e)
}

fn parse_status(label: &str) -> Result<OrderStatus, ApiError> {
    OrderStatus::from_label(label)
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, format!("Unknown status: {}", label)))
}

/// GET /api/orders
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<Vec<GridRowView>>, ApiError> {
    let rows = session::with_app(|app| app.rows(query.all)).map_err(session_error)?;
    Ok(Json(rows))
}

/// POST /api/orders
pub async fn add_row() -> Result<Json<GridRowView>, ApiError> {
    let view = session::with_app(|app| {
        let id = app.add_row();
        app.rows(true).into_iter().find(|r| r.id == id)
    })
    .map_err(session_error)?;

    view.map(Json)
        .ok_or_else(|| api_error(StatusCode::INTERNAL_SERVER_ERROR, "New row was not stored"))
}

/// PUT /api/orders/:id/cells
pub async fn edit_cell(
    Path(id): Path<String>,
    Json(req): Json<EditCellRequest>,
) -> Result<Json<GridRowView>, ApiError> {
    let uuid = Uuid::parse_str(&id)
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, format!("Invalid row id: {}", id)))?;

    let view = session::with_app(|app| app.edit_cell(uuid, &req.column, &req.value))
        .map_err(session_error)?
        .map_err(grid_error)?;
    Ok(Json(view))
}

/// POST /api/orders/delete
pub async fn delete_selected(
    Json(req): Json<SelectionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = session::with_app(|app| app.delete_selected(&req.ids))
        .map_err(session_error)?
        .map_err(grid_error)?;
    Ok(Json(json!({ "deleted": deleted })))
}

/// POST /api/orders/status
pub async fn set_status(
    Json(req): Json<SetStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status = parse_status(&req.status)?;
    let updated = session::with_app(|app| app.set_status(&req.ids, status))
        .map_err(session_error)?
        .map_err(grid_error)?;
    Ok(Json(json!({ "updated": updated })))
}

/// PUT /api/orders/filter
pub async fn set_filter(Json(req): Json<FilterRequest>) -> Result<Json<Vec<OrderStatus>>, ApiError> {
    let statuses = req
        .statuses
        .iter()
        .map(String::as_str)
        .map(parse_status)
        .collect::<Result<Vec<_>, _>>()?;

    let active = session::with_app(|app| app.set_filter(statuses)).map_err(session_error)?;
    Ok(Json(active))
}

/// POST /api/orders/clear
pub async fn clear_all() -> Result<StatusCode, ApiError> {
    session::with_app(|app| app.clear_all()).map_err(session_error)?;
    tracing::info!("All rows cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/orders/export
pub async fn export_csv(Json(req): Json<FileRequest>) -> Result<Json<serde_json::Value>, ApiError> {
    let path = PathBuf::from(&req.path);
    let saved = session::with_app(|app| app.save_csv(&path))
        .map_err(session_error)?
        .map_err(|e| {
            api_error(
                StatusCode::BAD_REQUEST,
                format!("Failed to save CSV:\n{}", e),
            )
        })?;
    Ok(Json(json!({ "saved": saved, "path": req.path })))
}

/// POST /api/orders/import
pub async fn import_csv(Json(req): Json<FileRequest>) -> Result<Json<serde_json::Value>, ApiError> {
    let path = PathBuf::from(&req.path);
    let loaded = session::with_app(|app| app.load_csv(&path))
        .map_err(session_error)?
        .map_err(|e| {
            api_error(
                StatusCode::BAD_REQUEST,
                format!("Failed to load CSV:\n{}", e),
            )
        })?;
    Ok(Json(json!({ "loaded": loaded, "path": req.path })))
}

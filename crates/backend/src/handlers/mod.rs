pub mod a001_product;
pub mod a002_order;
pub mod a003_address;
pub mod a004_agent;

use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

/// Ответ с ошибкой: код и тело `{"error": msg}`
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn api_error(status: StatusCode, msg: impl std::fmt::Display) -> ApiError {
    let error_msg = msg.to_string();
    if status.is_server_error() {
        tracing::error!("{}", error_msg);
    } else {
        tracing::debug!("Request rejected: {}", error_msg);
    }
    (status, Json(json!({"error": error_msg})))
}

/// Сессия недоступна: это ошибка сервера, а не запроса
pub fn session_error(e: anyhow::Error) -> ApiError {
    api_error(StatusCode::INTERNAL_SERVER_ERROR, e)
}

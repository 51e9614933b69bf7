use axum::Json;

use contracts::domain::a001_product::Product;

use super::{session_error, ApiError};
use crate::shared::data::session;

/// GET /api/products
pub async fn list_all() -> Result<Json<Vec<Product>>, ApiError> {
    let products = session::with_app(|app| app.products().to_vec()).map_err(session_error)?;
    Ok(Json(products))
}

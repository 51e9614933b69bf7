use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ORDERS GRID
        // ========================================
        .route(
            "/api/orders",
            get(handlers::a002_order::list).post(handlers::a002_order::add_row),
        )
        .route(
            "/api/orders/:id/cells",
            put(handlers::a002_order::edit_cell),
        )
        .route(
            "/api/orders/delete",
            post(handlers::a002_order::delete_selected),
        )
        .route(
            "/api/orders/status",
            post(handlers::a002_order::set_status),
        )
        .route(
            "/api/orders/filter",
            put(handlers::a002_order::set_filter),
        )
        .route("/api/orders/clear", post(handlers::a002_order::clear_all))
        // CSV files
        .route(
            "/api/orders/export",
            post(handlers::a002_order::export_csv),
        )
        .route(
            "/api/orders/import",
            post(handlers::a002_order::import_csv),
        )
        // ========================================
        // REFERENCE DATA
        // ========================================
        .route("/api/products", get(handlers::a001_product::list_all))
        .route(
            "/api/agents",
            get(handlers::a004_agent::list_all).put(handlers::a004_agent::save),
        )
        .route(
            "/api/addresses",
            get(handlers::a003_address::suggest).delete(handlers::a003_address::clear_history),
        )
}

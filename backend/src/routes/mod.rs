//! Route definitions for the Stockroom inventory backend

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Protected routes - product catalogue
        .nest("/products", product_routes(state.clone()))
        // Protected routes - stock movements
        .nest("/purchases", purchase_routes(state.clone()))
        .nest("/sales", sale_routes(state.clone()))
        // Protected routes - inventory history
        .nest("/inventories", inventory_routes(state))
}

/// Product management routes (protected)
fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Purchase recording routes (protected)
fn purchase_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_purchase))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Sale recording routes (protected)
fn sale_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_sale))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Inventory history routes (protected)
fn inventory_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // A bare request is answered 400, the history is always per product
        .route("/", get(handlers::get_inventory_index))
        .route("/:product_id", get(handlers::get_inventory))
        .route("/:product_id/balance", get(handlers::get_stock_balance))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

//! HTTP handlers for sale recording endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::sale::{CreateSaleInput, Sale, SaleService};
use crate::AppState;

/// Record a sale; rejected with a conflict when stock would be exceeded
pub async fn create_sale(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateSaleInput>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let service = SaleService::new(state.db);
    let sale = service.create_sale(input).await?;

    tracing::info!(
        user_id = %current_user.0.user_id,
        sale_id = %sale.id,
        product_id = %sale.product_id,
        "sale recorded"
    );

    Ok((StatusCode::CREATED, Json(sale)))
}

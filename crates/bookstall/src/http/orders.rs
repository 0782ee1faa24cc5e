//! Order handlers: creation (the integrity-checked write path) and lookup.

use crate::checkout::validate_customer;
use crate::http::envelope::ApiResponse;
use crate::http::error::HttpError;
use crate::http::AppState;
use crate::model::{Order, OrderId, OrderRequest};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// `POST /api/orders`
///
/// The body is an [`OrderRequest`]: customer details, `{book_id, quantity}`
/// lines, a claimed total, and optional notes. Customer fields are checked
/// here as well, with per-field messages in `details`; well-behaved clients
/// validate before submitting, but the API does not rely on that. On success
/// the canonical persisted order comes back with a 201; rejections map to
/// 400/404/409 through [`HttpError`].
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Order>>), HttpError> {
    if let Err(errors) = validate_customer(&request.customer) {
        return Err(HttpError::bad_request("Invalid customer details").with_details(errors));
    }
    let order = state.orders.place_order(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(order))))
}

/// `GET /api/orders/:id`
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, HttpError> {
    let order = state
        .orders
        .get_order(OrderId(id.clone()))
        .await?
        .ok_or_else(|| HttpError::not_found("Order", &id))?;
    Ok(Json(ApiResponse::ok(order)))
}

//! Catalog read handlers: listing with filters, search, classes, and
//! single-book lookup. All read-only, all enveloped.

use crate::catalog::{BookFilter, BookSort, SortOrder};
use crate::http::envelope::{ApiResponse, PagedResponse};
use crate::http::error::HttpError;
use crate::http::AppState;
use crate::model::{Book, BookId};
use axum::extract::{Path, Query, State};
use axum::Json;
use docstore::StoreClient;
use serde::Deserialize;

/// Query parameters for `GET /api/books`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub class: Option<String>,
    pub publisher: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// `title`, `price`, or `publisher`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Query parameters for `GET /api/books/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

fn parse_sort(params: &ListParams) -> Result<(BookSort, SortOrder), HttpError> {
    let sort_by = match params.sort_by.as_deref() {
        None | Some("title") => BookSort::Title,
        Some("price") => BookSort::Price,
        Some("publisher") => BookSort::Publisher,
        Some(other) => {
            return Err(HttpError::bad_request(format!(
                "Unknown sort field: {other}"
            )))
        }
    };
    let order = match params.order.as_deref() {
        None | Some("asc") => SortOrder::Asc,
        Some("desc") => SortOrder::Desc,
        Some(other) => {
            return Err(HttpError::bad_request(format!(
                "Unknown sort order: {other}"
            )))
        }
    };
    Ok((sort_by, order))
}

/// `GET /api/books`
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PagedResponse>, HttpError> {
    let (sort_by, order) = parse_sort(&params)?;
    let filter = BookFilter {
        class: params.class,
        publisher: params.publisher,
        min_price: params.min_price,
        max_price: params.max_price,
        sort_by,
        order,
        page: params.page.unwrap_or(1),
        limit: params.limit.unwrap_or(0),
    };
    let page = state.catalog.list(filter).await?;
    Ok(Json(PagedResponse::from(page)))
}

/// `GET /api/books/search`
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PagedResponse>, HttpError> {
    let page = state
        .catalog
        .search(
            params.q,
            params.page.unwrap_or(1),
            params.limit.unwrap_or(0),
        )
        .await?;
    Ok(Json(PagedResponse::from(page)))
}

/// `GET /api/books/classes`
pub async fn list_classes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, HttpError> {
    let classes = state.catalog.classes().await?;
    Ok(Json(ApiResponse::ok(classes)))
}

/// `GET /api/books/:id`
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Book>>, HttpError> {
    let book = state
        .catalog
        .find_by_id(BookId(id.clone()))
        .await?
        .ok_or_else(|| HttpError::not_found("Book", &id))?;
    Ok(Json(ApiResponse::ok(book)))
}

//! Response envelopes: every successful body is `{success: true, data}`,
//! paged catalog responses add a `pagination` object.

use crate::catalog::{BookPage, Pagination};
use crate::model::Book;
use serde::Serialize;

/// `{success: true, data: ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{success: true, data: [...], pagination: {...}}`
#[derive(Debug, Serialize)]
pub struct PagedResponse {
    pub success: bool,
    pub data: Vec<Book>,
    pub pagination: Pagination,
}

impl From<BookPage> for PagedResponse {
    fn from(page: BookPage) -> Self {
        Self {
            success: true,
            data: page.books,
            pagination: page.pagination,
        }
    }
}

//! # HTTP Error Mapping
//!
//! One error type for every handler. Domain errors convert into it, it
//! renders as `{success: false, error, message?, details?}`, and the status
//! code reflects the failure class: 400 for validation and integrity
//! mismatches, 404 for unresolvable ids, 409 for id collisions, 500 for
//! everything unexpected.

use crate::catalog::CatalogError;
use crate::checkout::FieldError;
use crate::orders::OrderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// A failure ready to leave the API boundary.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    error: String,
    message: Option<String>,
    details: Option<Vec<FieldError>>,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldError>>,
}

impl HttpError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.into(),
            message: None,
            details: None,
        }
    }

    pub fn not_found(kind: &str, id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: format!("{kind} not found"),
            message: Some(id.to_string()),
            details: None,
        }
    }

    pub fn conflict(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            error: error.into(),
            message: None,
            details: None,
        }
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: error.into(),
            message: None,
            details: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.error,
            message: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<OrderError> for HttpError {
    fn from(e: OrderError) -> Self {
        match &e {
            OrderError::BookNotFound(id) => Self::not_found("Book", id),
            OrderError::TotalMismatch { .. } => {
                // Both totals travel back in the message.
                Self::bad_request("Order total mismatch").with_message(e.to_string())
            }
            OrderError::Empty
            | OrderError::InvalidTotal(_)
            | OrderError::InvalidQuantity { .. }
            | OrderError::Validation(_) => Self::bad_request(e.to_string()),
            OrderError::DuplicateId(_) => Self::conflict(e.to_string()),
            OrderError::Store(_) => Self::internal("Failed to place order"),
        }
    }
}

impl From<CatalogError> for HttpError {
    fn from(e: CatalogError) -> Self {
        match &e {
            CatalogError::NotFound(id) => Self::not_found("Book", id),
            CatalogError::InvalidBook(_) => Self::bad_request(e.to_string()),
            CatalogError::Store(_) => Self::internal("Catalog unavailable"),
        }
    }
}

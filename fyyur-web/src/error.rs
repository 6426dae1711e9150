//! Error types for the Fyyur web server
//!
//! `ApiError` answers `/api` routes with JSON; `PageError` answers page
//! routes with the 404/500 HTML pages. Both keep "not found" and storage
//! failures apart.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::pages::layout;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<fyyur_common::Error> for ApiError {
    fn from(err: fyyur_common::Error) -> Self {
        use fyyur_common::Error as E;
        match err {
            E::NotFound(msg) => ApiError::NotFound(msg),
            E::Validation(msg) | E::Precondition(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status();
        if status.is_server_error() {
            error!("{}", self);
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.message(),
            }
        }));

        (status, body).into_response()
    }
}

/// Error raised by an HTML page handler
#[derive(Debug, Error)]
#[error(transparent)]
pub struct PageError(#[from] ApiError);

impl From<fyyur_common::Error> for PageError {
    fn from(err: fyyur_common::Error) -> Self {
        PageError(ApiError::from(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _) = self.0.status();
        let page = if status == StatusCode::NOT_FOUND {
            layout::not_found_page()
        } else {
            error!("{}", self.0);
            layout::server_error_page()
        };

        (status, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_and_storage_errors_stay_distinct() {
        let missing = ApiError::from(fyyur_common::Error::NotFound("venue 1".into()));
        let broken = ApiError::from(fyyur_common::Error::Database(sqlx::Error::PoolClosed));

        assert_eq!(missing.status().0, StatusCode::NOT_FOUND);
        assert_eq!(broken.status().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_mistakes_are_bad_requests() {
        let err = ApiError::from(fyyur_common::Error::Validation("name is required".into()));
        assert_eq!(err.status().0, StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "name is required");
    }

    #[test]
    fn test_page_error_statuses() {
        let missing = PageError::from(fyyur_common::Error::NotFound("artist 2".into()));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let broken = PageError::from(fyyur_common::Error::Config("boom".into()));
        assert_eq!(broken.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

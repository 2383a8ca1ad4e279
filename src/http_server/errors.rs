//! # HTTP API Errors
//!
//! Maps data store outcomes onto status codes and a JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::datastore::DataStoreError;
use crate::observability::{log_event, Event};

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access denied: either no X-API-TOKEN was supplied or it lacks permission for this action")]
    AccessDenied,

    #[error("Not found: {ns}/{doc}")]
    NotFound { ns: String, doc: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::AccessDenied => 403,
            ApiError::NotFound { .. } => 404,
            ApiError::InvalidJson(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<DataStoreError> for ApiError {
    fn from(err: DataStoreError) -> Self {
        match err {
            DataStoreError::AccessDenied => ApiError::AccessDenied,
            DataStoreError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        if let ApiError::Internal(msg) = &self {
            log_event(Event::HttpInternalError, &[("error", msg.as_str())]);
        }

        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.to_string(),
            code,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::AccessDenied.status_code(), 403);
        assert_eq!(
            ApiError::NotFound {
                ns: "ns".into(),
                doc: "doc".into()
            }
            .status_code(),
            404
        );
        assert_eq!(ApiError::InvalidJson("eof".into()).status_code(), 400);
        assert_eq!(ApiError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_store_errors_keep_their_kind() {
        assert!(matches!(
            ApiError::from(DataStoreError::AccessDenied),
            ApiError::AccessDenied
        ));
        assert!(matches!(
            ApiError::from(DataStoreError::Internal("Lock poisoned".into())),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::AccessDenied.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

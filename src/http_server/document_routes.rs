//! Document HTTP Routes
//!
//! - `GET  /:ns/:doc` read
//! - `POST /:ns/:doc` replace
//! - `PUT  /:ns/:doc` append, with the delimiter configured for the
//!   document's extension

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::errors::{ApiError, ApiResult};
use super::state::{client_token, ApiState};
use crate::datastore::{checked_append, checked_get, checked_put};

/// Create document routes
pub fn document_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/:ns/:doc",
            get(get_document_handler)
                .post(put_document_handler)
                .put(append_document_handler),
        )
        .with_state(state)
}

async fn get_document_handler(
    State(state): State<Arc<ApiState>>,
    Path((ns, doc)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let value = checked_get(state.store.as_ref(), client_token(&headers), &ns, &doc)?;
    let Some(value) = value else {
        return Err(ApiError::NotFound { ns, doc });
    };

    let content_type = state.config.content_type_for(&doc).to_string();
    Ok(([(header::CONTENT_TYPE, content_type)], value).into_response())
}

async fn put_document_handler(
    State(state): State<Arc<ApiState>>,
    Path((ns, doc)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<&'static str> {
    checked_put(state.store.as_ref(), client_token(&headers), &ns, &doc, &body)?;
    Ok("OK")
}

async fn append_document_handler(
    State(state): State<Arc<ApiState>>,
    Path((ns, doc)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<&'static str> {
    let delim = state.config.delimiter_for(&doc);
    checked_append(
        state.store.as_ref(),
        client_token(&headers),
        &ns,
        &doc,
        delim,
        &body,
    )?;
    Ok("OK")
}

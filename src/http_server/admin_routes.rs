//! Management HTTP Routes
//!
//! - `PUT /token/:ns/:doc` set per-document rights (namespace admin only)
//! - `PUT /admin/:ns` grant/revoke namespace admin (admin only)
//! - `PUT /admin` grant/revoke admin (root only)
//!
//! Requests without a token get a freshly generated one, echoed back in
//! the response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    routing::put,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use super::state::{client_token, ApiState};
use crate::datastore::{checked_set_admin, checked_set_namespace_admin, checked_set_token};

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTokenRequest {
    #[serde(default, alias = "Token")]
    pub token: Option<String>,
    #[serde(default, alias = "Get")]
    pub get: bool,
    #[serde(default, alias = "Put")]
    pub put: bool,
    #[serde(default, alias = "Append")]
    pub append: bool,
}

/// Body of both admin and namespace-admin requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAdminRequest {
    #[serde(default, alias = "Token")]
    pub token: Option<String>,
    #[serde(default, alias = "Is")]
    pub is: bool,
}

// ==================
// Admin Routes
// ==================

/// Create management routes
pub fn admin_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/token/:ns/:doc", put(set_token_handler))
        .route("/admin/:ns", put(set_namespace_admin_handler))
        .route("/admin", put(set_admin_handler))
        .with_state(state)
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

async fn set_token_handler(
    State(state): State<Arc<ApiState>>,
    Path((ns, doc)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<SetTokenRequest>> {
    let mut request: SetTokenRequest = parse_json(&body)?;
    let token = state.token_or_generate(request.token.take());

    checked_set_token(
        state.store.as_ref(),
        client_token(&headers),
        &token,
        &ns,
        &doc,
        request.get,
        request.put,
        request.append,
    )?;

    request.token = Some(token);
    Ok(Json(request))
}

async fn set_namespace_admin_handler(
    State(state): State<Arc<ApiState>>,
    Path(ns): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<SetAdminRequest>> {
    let mut request: SetAdminRequest = parse_json(&body)?;
    let token = state.token_or_generate(request.token.take());

    checked_set_namespace_admin(
        state.store.as_ref(),
        client_token(&headers),
        &token,
        &ns,
        request.is,
    )?;

    request.token = Some(token);
    Ok(Json(request))
}

async fn set_admin_handler(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<SetAdminRequest>> {
    let mut request: SetAdminRequest = parse_json(&body)?;
    let token = state.token_or_generate(request.token.take());

    checked_set_admin(
        state.store.as_ref(),
        client_token(&headers),
        &token,
        request.is,
    )?;

    request.token = Some(token);
    Ok(Json(request))
}

//! Shared state handed to every handler.

use std::sync::Arc;

use axum::http::HeaderMap;

use super::config::ServerConfig;
use crate::datastore::DataStore;
use crate::token::TokenGenerator;

/// Header carrying the caller's token
pub const TOKEN_HEADER: &str = "x-api-token";

pub struct ApiState {
    pub store: Arc<dyn DataStore>,
    pub tokens: Arc<dyn TokenGenerator>,
    pub config: ServerConfig,
}

impl ApiState {
    pub fn new(
        store: Arc<dyn DataStore>,
        tokens: Arc<dyn TokenGenerator>,
        config: ServerConfig,
    ) -> Self {
        Self {
            store,
            tokens,
            config,
        }
    }

    /// The requested token, or a fresh one when none (or an empty one) was given
    pub fn token_or_generate(&self, requested: Option<String>) -> String {
        match requested {
            Some(token) if !token.is_empty() => token,
            _ => self.tokens.generate(),
        }
    }
}

/// Caller token from the request headers; missing or non-ASCII is `""`
pub fn client_token(headers: &HeaderMap) -> &str {
    headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

//! # HTTP Server
//!
//! Combines the document and management routers behind request logging
//! and CORS.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use uuid::Uuid;

use super::admin_routes::admin_routes;
use super::config::ServerConfig;
use super::document_routes::document_routes;
use super::state::ApiState;
use crate::observability::{log_event, Event};

pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Build a server around shared state; the bind address comes from
    /// `state.config`
    pub fn new(state: Arc<ApiState>) -> Self {
        let config = state.config.clone();
        let router = build_router(state);
        Self { config, router }
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event(Event::ServerListening, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStopped, &[]);
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(state: Arc<ApiState>) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/r", document_routes(state.clone()))
        .nest("/m", admin_routes(state))
        .layer(middleware::from_fn(log_requests))
        .layer(cors)
}

async fn index_handler() -> &'static str {
    "docvault api"
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// One `HTTP_REQUEST` line per request
async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let duration_us = started.elapsed().as_micros().to_string();
    log_event(
        Event::HttpRequest,
        &[
            ("duration_us", duration_us.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", status.as_str()),
        ],
    );
    response
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

//! # HTTP Server Module
//!
//! Thin HTTP adapter over the checked data store operations.
//!
//! # Endpoints
//!
//! - `GET /` - banner
//! - `GET /health` - health check
//! - `/r/:ns/:doc` - read (GET), replace (POST), append (PUT)
//! - `/m/*` - rights management
//!
//! The caller's token travels in the `X-API-TOKEN` header.

pub mod admin_routes;
pub mod config;
pub mod document_routes;
pub mod errors;
pub mod server;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
pub use state::{ApiState, TOKEN_HEADER};

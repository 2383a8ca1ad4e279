//! docvault - a multi-tenant, token-gated in-memory document store
//!
//! Documents are addressed by (namespace, name). Access is granted by a
//! root token to admins, by admins to namespace admins, and by namespace
//! admins to per-document tokens holding get, put and append rights.

pub mod cli;
pub mod datastore;
pub mod http_server;
pub mod observability;
pub mod token;

//! HTTP Server Configuration
//!
//! Bind address, CORS, root token, and the per-extension tables the
//! transport uses to pick a Content-Type for reads and a delimiter for
//! appends. Every field has a default, so an empty JSON object is a valid
//! configuration file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;
use crate::token::DEFAULT_TOKEN_BYTES;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Root token; generated at boot when absent
    #[serde(default)]
    pub root_token: Option<String>,

    /// Random bytes per generated token
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,

    /// Document extension (with leading dot) -> Content-Type
    #[serde(default = "default_content_types")]
    pub content_types: HashMap<String, String>,

    /// Content-Type for extensions missing from `content_types`
    #[serde(default = "default_content_type")]
    pub default_content_type: String,

    /// Document extension (with leading dot) -> append delimiter
    #[serde(default = "default_delimiters")]
    pub delimiters: HashMap<String, String>,

    /// Minimum log severity: trace, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_token_bytes() -> usize {
    DEFAULT_TOKEN_BYTES
}

fn default_content_types() -> HashMap<String, String> {
    HashMap::from([
        (".json".to_string(), "application/json".to_string()),
        (".txt".to_string(), "text/plain".to_string()),
        (".log".to_string(), "text/plain".to_string()),
    ])
}

fn default_content_type() -> String {
    "application/octet-stream".to_string()
}

fn default_delimiters() -> HashMap<String, String> {
    HashMap::from([(".log".to_string(), "\n".to_string())])
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            root_token: None,
            token_bytes: default_token_bytes(),
            content_types: default_content_types(),
            default_content_type: default_content_type(),
            delimiters: default_delimiters(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Create a default config with the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: ServerConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_bytes == 0 {
            return Err(ConfigError::Invalid("token_bytes must be > 0".into()));
        }

        if matches!(self.root_token.as_deref(), Some("")) {
            return Err(ConfigError::Invalid("root_token must not be empty".into()));
        }

        self.severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> Result<Severity, ConfigError> {
        self.log_level.parse().map_err(ConfigError::Invalid)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Content-Type served for `doc`
    pub fn content_type_for(&self, doc: &str) -> &str {
        self.content_types
            .get(extension(doc))
            .unwrap_or(&self.default_content_type)
    }

    /// Delimiter inserted before each append to `doc`; empty when unmapped
    pub fn delimiter_for(&self, doc: &str) -> &[u8] {
        self.delimiters
            .get(extension(doc))
            .map(|d| d.as_bytes())
            .unwrap_or_default()
    }
}

/// Suffix of the last path element starting at its final `.`, or `""`
pub fn extension(doc: &str) -> &str {
    let name_start = doc.rfind('/').map(|i| i + 1).unwrap_or(0);
    match doc[name_start..].rfind('.') {
        Some(i) => &doc[name_start + i..],
        None => "",
    }
}

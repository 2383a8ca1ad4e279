//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::datastore::MemDataStore;
use crate::http_server::{ApiState, HttpServer, ServerConfig};
use crate::observability::{log_event, Event, Logger};
use crate::token::{RandomTokenGenerator, TokenGenerator};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            root_token,
        } => serve(config.as_deref(), port, root_token),
        Command::GenToken { bytes } => gen_token(bytes, &mut io::stdout()),
    }
}

/// Load the config file (or defaults) and apply command-line overrides
pub fn resolve_config(
    path: Option<&Path>,
    port: Option<u16>,
    root_token: Option<String>,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(root_token) = root_token {
        config.root_token = Some(root_token);
    }

    config.validate()?;
    Ok(config)
}

/// Build the store and HTTP server for `config`.
///
/// When no root token is configured one is generated and logged once, since
/// there is no other way to learn it.
pub fn boot(mut config: ServerConfig) -> CliResult<HttpServer> {
    Logger::set_min_severity(config.severity()?);

    let tokens = Arc::new(RandomTokenGenerator::new(config.token_bytes));
    let root_token = match config.root_token.take() {
        Some(token) => token,
        None => {
            let token = tokens.generate();
            log_event(Event::RootTokenIssued, &[("root_token", token.as_str())]);
            token
        }
    };

    let port = config.port.to_string();
    log_event(
        Event::ConfigLoaded,
        &[("host", config.host.as_str()), ("port", port.as_str())],
    );

    let store = Arc::new(MemDataStore::new(root_token));
    let state = ApiState::new(store, tokens, config);
    Ok(HttpServer::new(Arc::new(state)))
}

/// Boot and serve until interrupted
pub fn serve(path: Option<&Path>, port: Option<u16>, root_token: Option<String>) -> CliResult<()> {
    let config = resolve_config(path, port, root_token)?;
    let server = boot(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Write one generated token followed by a newline
pub fn gen_token<W: Write>(bytes: usize, out: &mut W) -> CliResult<()> {
    if bytes == 0 {
        return Err(CliError::config_error("--bytes must be > 0"));
    }
    let token = RandomTokenGenerator::new(bytes).generate();
    writeln!(out, "{}", token)?;
    Ok(())
}

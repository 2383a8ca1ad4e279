//! CLI module for docvault
//!
//! - serve: boot an in-memory store and serve it over HTTP
//! - gen-token: print a fresh random token

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{boot, gen_token, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};

//! CLI argument definitions using clap
//!
//! - docvault serve [--config <path>] [--port <n>] [--root-token <t>]
//! - docvault gen-token [--bytes <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::token::DEFAULT_TOKEN_BYTES;

/// docvault - a token-gated, namespaced document store
#[derive(Parser, Debug)]
#[command(name = "docvault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overrides the config file
        #[arg(long)]
        port: Option<u16>,

        /// Root token, overrides the config file. Generated when unset.
        #[arg(long, env = "DOCVAULT_ROOT_TOKEN")]
        root_token: Option<String>,
    },

    /// Print a freshly generated token
    GenToken {
        /// Number of random bytes
        #[arg(long, default_value_t = DEFAULT_TOKEN_BYTES)]
        bytes: usize,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

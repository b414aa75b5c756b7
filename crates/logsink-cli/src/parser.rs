//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Development log sink: renders log entries received over HTTP batches or
/// WebSocket streams as framed console blocks.
#[derive(Parser, Debug)]
#[command(name = "logsink")]
#[command(about = "Render log entries pushed over HTTP or WebSocket on the console")]
#[command(version)]
pub struct Cli {
    /// Disable ANSI colors in the rendered output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Enable verbose/debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

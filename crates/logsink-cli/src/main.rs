//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging and dispatches to the
//! selected endpoint(s).

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use logsink_cli::{Cli, CliError, handlers, logging};
use logsink_core::{ConsoleSink, StdoutSink, Theme, render};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::detect()
    };

    let Some(command) = cli.command else {
        // No command provided - show help
        if let Err(e) = Cli::command().print_help() {
            tracing::error!("failed to print help: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    match handlers::execute(command, theme.clone()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let block = match &err {
                CliError::Interrupted => render::shutdown_notice(&theme),
                other => render::fatal_error(&theme, &other.to_string()),
            };
            if let Err(e) = StdoutSink::new().write_block(&block) {
                tracing::error!("failed to print exit notice: {e}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

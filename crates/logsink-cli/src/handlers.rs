//! Command dispatch.
//!
//! Each command builds its endpoint configuration, runs the server and
//! races it against Ctrl-C.

use logsink_axum::{ServerConfig, bootstrap, serve_all, start_batch_server, start_stream_server};
use logsink_core::Theme;
use tracing::info;

use crate::commands::Commands;
use crate::error::CliError;

/// Translate a command into a server configuration.
pub fn server_config(command: &Commands, theme: Theme) -> ServerConfig {
    let mut config = ServerConfig {
        theme,
        ..ServerConfig::with_defaults()
    };
    match command {
        Commands::Http(args) => {
            config.batch = args.endpoint();
            config.with_allowed_origins(args.cors_origins.clone())
        }
        Commands::Socket(args) => {
            config.stream = args.endpoint();
            config
        }
        Commands::Serve(args) => {
            config.batch = args.batch_endpoint();
            config.stream = args.stream_endpoint();
            config.with_allowed_origins(args.cors_origins.clone())
        }
    }
}

async fn run_server(command: &Commands, config: ServerConfig) -> anyhow::Result<()> {
    match command {
        Commands::Http(_) => {
            let ctx = bootstrap(&config);
            start_batch_server(&config.batch, ctx, config.cors.clone()).await
        }
        Commands::Socket(_) => {
            let ctx = bootstrap(&config);
            start_stream_server(&config.stream, ctx).await
        }
        Commands::Serve(_) => serve_all(config).await,
    }
}

/// Run `command` until it fails or the process is interrupted.
pub async fn execute(command: Commands, theme: Theme) -> Result<(), CliError> {
    let config = server_config(&command, theme);

    tokio::select! {
        result = run_server(&command, config) => result.map_err(CliError::from),
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupt received");
            Err(CliError::Interrupted)
        }
    }
}

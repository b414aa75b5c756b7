//! Subcommands and their endpoint options.
//!
//! Command-line values take precedence over environment variables, which
//! take precedence over the built-in defaults.

use clap::{Args, Subcommand};
use logsink_core::{DEFAULT_BATCH_PORT, DEFAULT_HOST, DEFAULT_STREAM_PORT, EndpointConfig};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the batch endpoint (HTTP POST of JSON arrays to /logs)
    Http(HttpArgs),

    /// Run the stream endpoint (one entry per WebSocket message)
    Socket(SocketArgs),

    /// Run both endpoints in one process
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct HttpArgs {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "PORT", default_value_t = DEFAULT_BATCH_PORT)]
    pub port: u16,

    /// Allowed CORS origin (repeatable); every origin is allowed when omitted
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

impl HttpArgs {
    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(&self.host, self.port)
    }
}

#[derive(Args, Debug, Clone)]
pub struct SocketArgs {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "PORT", default_value_t = DEFAULT_STREAM_PORT)]
    pub port: u16,
}

impl SocketArgs {
    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(&self.host, self.port)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Host of the batch endpoint
    #[arg(long = "http-host", env = "HTTP_HOST", default_value = DEFAULT_HOST)]
    pub http_host: String,

    /// Port of the batch endpoint
    #[arg(long = "http-port", env = "HTTP_PORT", default_value_t = DEFAULT_BATCH_PORT)]
    pub http_port: u16,

    /// Host of the stream endpoint
    #[arg(long = "ws-host", env = "WS_HOST", default_value = DEFAULT_HOST)]
    pub ws_host: String,

    /// Port of the stream endpoint
    #[arg(long = "ws-port", env = "WS_PORT", default_value_t = DEFAULT_STREAM_PORT)]
    pub ws_port: u16,

    /// Allowed CORS origin for the batch endpoint (repeatable)
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

impl ServeArgs {
    pub fn batch_endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(&self.http_host, self.http_port)
    }

    pub fn stream_endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(&self.ws_host, self.ws_port)
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::Commands;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn http_flags_override_everything() {
        let cli = Cli::parse_from(["logsink", "http", "--host", "0.0.0.0", "--port", "9999"]);
        let Some(Commands::Http(args)) = cli.command else {
            panic!("expected http command");
        };
        assert_eq!(args.endpoint().bind_addr(), "0.0.0.0:9999");
        assert!(args.cors_origins.is_empty());
    }

    #[test]
    fn socket_default_port_differs_from_http() {
        if std::env::var_os("PORT").is_some() {
            return;
        }
        let cli = Cli::parse_from(["logsink", "socket"]);
        let Some(Commands::Socket(args)) = cli.command else {
            panic!("expected socket command");
        };
        assert_eq!(args.port, 12345);
    }

    #[test]
    fn serve_configures_endpoints_independently() {
        let cli = Cli::parse_from([
            "logsink",
            "serve",
            "--http-port",
            "8000",
            "--ws-host",
            "::1",
            "--ws-port",
            "8001",
            "--cors-origin",
            "http://localhost:3000",
        ]);
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.batch_endpoint().port, 8000);
        assert_eq!(args.stream_endpoint().bind_addr(), "[::1]:8001");
        assert_eq!(args.cors_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["logsink", "http", "--port", "70000"]).is_err());
    }
}

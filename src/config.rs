//! Server Configuration
//!
//! Command-line flags, each of which can also be set through the environment.

use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "quotes_service", about = "In-memory quotes HTTP service")]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "QUOTES_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Default log filter, used when RUST_LOG is not set.
    #[arg(long, env = "QUOTES_LOG", default_value = "info")]
    pub log_level: String,
}

//! meteo Server Binary
//!
//! Starts the sequential TCP server for the weather service.

use clap::Parser;
use meteo::network::Server;
use meteo::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// meteo Server
#[derive(Parser, Debug)]
#[command(name = "meteo-server")]
#[command(about = "Weather request/response server")]
#[command(version)]
struct Args {
    /// Listen port
    #[arg(short, long, default_value_t = meteo::config::DEFAULT_PORT)]
    port: u16,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,meteo=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("meteo Server v{}", meteo::VERSION);

    let config = Config::builder().port(args.port).build();

    // Bind the listener; the measurement generator is seeded from the
    // clock here, once per process
    let mut server = match Server::bind(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.bind_addr(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

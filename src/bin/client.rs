//! meteo Client Binary
//!
//! Sends one weather request and prints the rendered reply.

use clap::Parser;
use meteo::network::Client;
use meteo::protocol::Request;
use meteo::{report, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// meteo Client
#[derive(Parser, Debug)]
#[command(name = "meteo-client")]
#[command(about = "Weather request/response client")]
#[command(version)]
struct Args {
    /// Server host or IP address
    #[arg(short, long, default_value = meteo::config::DEFAULT_HOST)]
    server: String,

    /// Server port
    #[arg(short, long, default_value_t = meteo::config::DEFAULT_PORT)]
    port: u16,

    /// Request string, e.g. "t bari"
    #[arg(short, long)]
    request: String,
}

fn main() {
    // Initialize tracing/logging (quiet by default for a CLI)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be between 1 and 65535");
        std::process::exit(1);
    }

    // Build the request from the raw "<type> <city>" string
    let request = match Request::from_input(&args.request) {
        Ok(req) => req,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("The request must look like \"t bari\" (type character, then city)");
            std::process::exit(1);
        }
    };

    let config = Config::builder().host(args.server).port(args.port).build();

    // One connection, one exchange
    let client = match Client::connect(config.addr()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: failed to connect to {}: {}", config.addr(), e);
            std::process::exit(1);
        }
    };

    let response = match client.exchange(&request) {
        Ok(resp) => resp,
        Err(e) => {
            eprintln!("Error: exchange with {} failed: {}", config.addr(), e);
            std::process::exit(1);
        }
    };

    println!("{}", report::render(&request, &response));
}

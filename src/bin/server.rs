//! meteo Server Binary
//!
//! Starts the weather-query TCP server.

use clap::Parser;
use meteo::network::Server;
use meteo::{Config, Station};
use tracing_subscriber::{fmt, EnvFilter};

/// meteo Server
#[derive(Parser, Debug)]
#[command(name = "meteo-server")]
#[command(about = "Weather query TCP server")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:56700")]
    listen: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("meteo Server v{}", meteo::VERSION);

    let config = Config::builder().listen_addr(&args.listen).build();

    // Bind failure is fatal; per-connection failures are not
    let server = match Server::bind(&config, Station::new()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind {}: {e}", config.listen_addr);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

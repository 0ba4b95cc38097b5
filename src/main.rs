//! HTTP server for the EV tariff engine.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ev_tariff_engine::api::{AppState, create_router};
use ev_tariff_engine::config::ConfigLoader;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory containing `locations.yaml`.
    #[clap(long, default_value = "./config/default", env = "EV_TARIFF_CONFIG_DIR")]
    config_dir: PathBuf,

    /// Address to listen on.
    #[clap(long, default_value = "127.0.0.1:3000", env = "EV_TARIFF_BIND")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match ConfigLoader::load(&args.config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %args.config_dir.display(), error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(args.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind = %args.bind, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(bind = %args.bind, locations = config.locations().len(), "Serving");
    let app = create_router(AppState::new(config));
    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

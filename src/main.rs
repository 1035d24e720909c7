//! Mono/Flux demo server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────────────┐
//!     ────────────────────┼─▶ http::server (request id, trace, timeout, limit)   │
//!                         │        │                                             │
//!                         │        ▼                                             │
//!                         │   http::{mono, flux, info} handlers                  │
//!                         │        │                                             │
//!                         │        ▼                                             │
//!                         │   service::{UserService, ProductService}             │
//!                         │        │  Mono<User> / Flux<Product>                 │
//!                         │        ▼                                             │
//!     Client Response     │   http::response (JSON / array / NDJSON / SSE)       │
//!     ◀───────────────────┼────────┘                                             │
//!                         │                                                      │
//!                         │   config · observability · lifecycle · security      │
//!                         └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use mono_flux_demo::config::{load_config, AppConfig, validate_config, ConfigError};
use mono_flux_demo::lifecycle::startup;
use mono_flux_demo::observability::logging;

#[derive(Parser)]
#[command(name = "mono-flux-demo")]
#[command(about = "Single-value vs multi-value HTTP demo server", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        "mono-flux-demo starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! User Registry Service entry point.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging filter (default: `user_registry=debug,tower_http=debug,info`)
//! - `LOG_FORMAT`: `json` for JSON lines, anything else for human-readable output
//! - See [`user_registry::infrastructure::AppConfig`] for the remaining variables

use std::env;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use user_registry::api::AppState;
use user_registry::infrastructure::AppConfig;
use user_registry::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting User Registry Service...");

    let config = load_config();
    tracing::info!(
        host = %config.host,
        port = config.port,
        seed_users = config.seed_users,
        "Configuration loaded"
    );

    let state = AppState::in_memory(config.clone());
    Server::new(&config, state).run().await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("user_registry=debug,tower_http=debug,info"));

    let json_output = env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json_output {
        registry.with(fmt::layer().json()).init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .init();
    }
}

fn load_config() -> AppConfig {
    match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    }
}

//! # Chat Relay
//!
//! Thin entry point that loads configuration and delegates to lib-web for server setup.

use lib_core::{AppError, Config};
use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(AppError::Config)?;
    config.validate().map_err(AppError::Config)?;

    start_server(ServerConfig::from(&config)).await
}

//! Veritext Server - HTTP REST API for article analysis
//!
//! This binary serves the Veritext analysis pipeline over REST with
//! authentication and rate limiting.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env if present
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    server::start_server(config).await?;

    Ok(())
}

//! Veritext Server - HTTP REST API for article analysis
//!
//! This crate exposes the Veritext analysis pipeline over a small REST API:
//!
//! - **Article Analysis**: single and batch analysis of article text
//! - **Health**: liveness and readiness probes
//!
//! # Features
//!
//! - **Authentication**: API key authentication with per-key rate limiting
//! - **Middleware**: compression, CORS, request ID tracking, request logging
//! - **Configuration**: environment variable and file-based configuration
//! - **Validation**: a minimum article-length gate runs before the core,
//!   so undersized inputs get a 400 with a user-facing message instead of
//!   an analysis result
//! - **Graceful Shutdown**: SIGTERM / Ctrl+C handling
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `POST /api/v1/analyze` - Analyze a single article
//! - `POST /api/v1/analyze/batch` - Analyze a batch of articles

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;

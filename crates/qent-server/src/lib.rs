//! Qent Server - HTTP service for building, simulating and storing quantum circuits.
//!
//! Callers describe a circuit (a qubit count and a list of gate symbols),
//! have it simulated on the local statevector engine, and read back persisted
//! runs next to a small table of business metrics.
//!
//! | Route | Method | Purpose |
//! |-------|--------|---------|
//! | `/` | GET | Service metadata |
//! | `/quantum-circuits` | GET, POST | List or register circuit descriptions |
//! | `/quantum-simulation` | POST | Exact statevector plus 1024-shot counts, not stored |
//! | `/quantum-execute` | POST | Sample the entangling circuit and store circuit + result |
//! | `/quantum-results` | GET | Stored results joined with their circuit |
//! | `/business-metrics` | GET | Metric table figures |
//! | `/system-status` | GET | Static status |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qent_server::{AppState, ServerConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig { in_memory: true, ..ServerConfig::default() };
//!     let bind = config.bind_address;
//!     let state = Arc::new(AppState::open(config)?);
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(bind).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod pipeline;
pub mod server;
pub mod state;

pub use config::{ConfigError, PartialConfig, ServerConfig};
pub use error::ApiError;
pub use server::create_router;
pub use state::AppState;

//! Qent server binary entry point.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use qent_server::{AppState, PartialConfig, ServerConfig, create_router};

/// Qent - quantum circuit simulation service
#[derive(Parser)]
#[command(name = "qent-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "QENT_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind to
    #[arg(short, long, env = "QENT_BIND")]
    bind: Option<SocketAddr>,

    /// SQLite database file
    #[arg(long, env = "QENT_DATABASE")]
    database: Option<PathBuf>,

    /// Keep everything in memory; nothing survives a restart
    #[arg(long, env = "QENT_IN_MEMORY")]
    in_memory: bool,

    /// Largest circuit accepted
    #[arg(long, env = "QENT_MAX_QUBITS")]
    max_qubits: Option<u32>,

    /// Largest shot count accepted
    #[arg(long, env = "QENT_MAX_SHOTS")]
    max_shots: Option<u32>,

    /// Shots used when a request names none
    #[arg(long, env = "QENT_DEFAULT_SHOTS")]
    default_shots: Option<u32>,

    /// Fixed sampling seed
    #[arg(long, env = "QENT_SEED")]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> PartialConfig {
        PartialConfig {
            bind_address: self.bind,
            database_path: self.database.clone(),
            in_memory: self.in_memory.then_some(true),
            max_qubits: self.max_qubits,
            max_shots: self.max_shots,
            default_shots: self.default_shots,
            seed: self.seed,
        }
    }

    fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "qent_server=info,tower_http=info",
            1 => "qent_server=debug,qent_sim=debug,qent_store=debug,tower_http=debug",
            _ => "trace",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.default_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Layer configuration: defaults, then file, then flags and environment
    let mut config = ServerConfig::default();
    if let Some(path) = &cli.config {
        let file = PartialConfig::load(path)?;
        config = config.layered(file);
        tracing::info!("Loaded configuration from {}", path.display());
    }
    let config = config.layered(cli.overrides());
    config.validate()?;

    let bind_addr = config.bind_address;
    let state = if config.in_memory {
        tracing::info!("Using in-memory circuit store");
        AppState::open(config)?
    } else {
        let path = config.database_path.clone();
        AppState::open(config)
            .with_context(|| format!("Failed to open database {}", path.display()))?
    };

    let app = create_router(Arc::new(state));

    tracing::info!("Starting Qent server at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

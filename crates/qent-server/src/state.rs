//! Application state for the server.

use std::sync::Arc;

use qent_sim::Simulator;
use qent_store::{CircuitStore, SqliteStore, StoreResult};

use crate::config::ServerConfig;

/// Shared application state.
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
    /// Simulator sized and seeded from the configuration.
    pub simulator: Simulator,
    /// Circuit and result store.
    pub store: Arc<dyn CircuitStore>,
}

impl AppState {
    /// Create application state over an existing store.
    pub fn new(config: ServerConfig, store: Arc<dyn CircuitStore>) -> Self {
        let mut simulator = Simulator::with_max_qubits(config.max_qubits);
        if let Some(seed) = config.seed {
            simulator = simulator.with_seed(seed);
        }
        Self {
            config,
            simulator,
            store,
        }
    }

    /// Open the store the configuration points at.
    pub fn open(config: ServerConfig) -> StoreResult<Self> {
        let store = if config.in_memory {
            SqliteStore::in_memory()?
        } else {
            SqliteStore::new(&config.database_path)?
        };
        Ok(Self::new(config, Arc::new(store)))
    }
}

//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! command-line flags and `QENT_*` environment variables. Each layer is a
//! [`PartialConfig`] whose set fields override the layer below.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use qent_sim::DEFAULT_MAX_QUBITS;

/// Default bind address.
pub const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 5000);

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Effective server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Use an in-memory database instead of `database_path`.
    pub in_memory: bool,
    /// Largest circuit accepted by any endpoint.
    pub max_qubits: u32,
    /// Largest shot count accepted by `/quantum-execute`.
    pub max_shots: u32,
    /// Shots used when a request does not name any.
    pub default_shots: u32,
    /// Fixed sampling seed, for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.into(),
            database_path: default_database_path(),
            in_memory: false,
            max_qubits: DEFAULT_MAX_QUBITS,
            max_shots: 100_000,
            default_shots: 1024,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Override every field the layer sets.
    pub fn layered(mut self, layer: PartialConfig) -> Self {
        if let Some(v) = layer.bind_address {
            self.bind_address = v;
        }
        if let Some(v) = layer.database_path {
            self.database_path = v;
        }
        if let Some(v) = layer.in_memory {
            self.in_memory = v;
        }
        if let Some(v) = layer.max_qubits {
            self.max_qubits = v;
        }
        if let Some(v) = layer.max_shots {
            self.max_shots = v;
        }
        if let Some(v) = layer.default_shots {
            self.default_shots = v;
        }
        if layer.seed.is_some() {
            self.seed = layer.seed;
        }
        self
    }

    /// Reject limits the service cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_qubits == 0 || self.max_qubits > 30 {
            return Err(ConfigError::Invalid(format!(
                "max_qubits must be in 1..=30, got {}",
                self.max_qubits
            )));
        }
        if self.max_shots == 0 {
            return Err(ConfigError::Invalid("max_shots must be positive".into()));
        }
        if self.default_shots == 0 || self.default_shots > self.max_shots {
            return Err(ConfigError::Invalid(format!(
                "default_shots must be in 1..={}, got {}",
                self.max_shots, self.default_shots
            )));
        }
        Ok(())
    }
}

/// One configuration layer; unset fields fall through.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    pub bind_address: Option<SocketAddr>,
    pub database_path: Option<PathBuf>,
    pub in_memory: Option<bool>,
    pub max_qubits: Option<u32>,
    pub max_shots: Option<u32>,
    pub default_shots: Option<u32>,
    pub seed: Option<u64>,
}

impl PartialConfig {
    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read and parse a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }
}

/// `~/.qent/quantum_enterprise.db`, or the working directory without a home.
pub fn default_database_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".qent"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quantum_enterprise.db")
}

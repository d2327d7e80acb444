//! Data transfer objects for the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qent_ir::Entanglement;
use qent_sim::{Amplitude, Counts};
use qent_store::{CircuitRecord, JoinedResult};

fn default_qubits() -> i64 {
    2
}

fn default_gates() -> Vec<String> {
    vec!["h".to_string(), "cx".to_string()]
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /quantum-circuits`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCircuitRequest {
    pub name: String,
    pub qubits: i64,
    pub depth: i64,
    #[serde(default)]
    pub gates_used: Vec<String>,
}

/// Body of `POST /quantum-simulation`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationRequest {
    #[serde(default = "default_qubits")]
    pub qubits: i64,
    #[serde(default = "default_gates")]
    pub gates: Vec<String>,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            qubits: default_qubits(),
            gates: default_gates(),
        }
    }
}

/// Body of `POST /quantum-execute`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default = "default_qubits")]
    pub qubits: i64,
    /// Falls back to the configured default.
    #[serde(default)]
    pub shots: Option<i64>,
    #[serde(default)]
    pub entanglement: Entanglement,
}

impl Default for ExecuteRequest {
    fn default() -> Self {
        Self {
            qubits: default_qubits(),
            shots: None,
            entanglement: Entanglement::default(),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Response to `GET /`.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub simulator: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Response to `POST /quantum-circuits`.
#[derive(Debug, Serialize)]
pub struct CreateCircuitResponse {
    pub id: i64,
    pub status: &'static str,
}

/// Response to `GET /quantum-circuits`.
#[derive(Debug, Serialize)]
pub struct CircuitListResponse {
    pub circuits: Vec<CircuitSummary>,
}

/// A persisted circuit as listed by the API.
#[derive(Debug, Serialize)]
pub struct CircuitSummary {
    pub id: i64,
    pub name: String,
    pub qubits: u32,
    pub depth: u32,
    pub gates_used: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CircuitRecord> for CircuitSummary {
    fn from(record: CircuitRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            qubits: record.qubits,
            depth: record.depth,
            gates_used: record.gates_used,
            created_at: record.created_at,
        }
    }
}

/// Response to `POST /quantum-simulation`.
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub circuit_depth: usize,
    pub qubits: u32,
    pub gates_used: Vec<String>,
    pub statevector: Vec<Amplitude>,
    pub measurement_counts: Counts,
    pub success: bool,
}

/// Response to `POST /quantum-execute`.
#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    pub circuit_id: i64,
    pub qubits: u32,
    pub shots: u32,
    pub results: Counts,
    pub depth: usize,
    pub success: bool,
}

/// Response to `GET /quantum-results`.
#[derive(Debug, Serialize)]
pub struct ResultListResponse {
    pub quantum_results: Vec<JoinedResult>,
}

/// Response to `GET /business-metrics`.
#[derive(Debug, Serialize)]
pub struct BusinessMetricsResponse {
    pub revenue_growth: String,
    pub quantum_adoption: String,
    pub client_satisfaction: String,
    pub quantum_circuits_run: String,
    pub research_breakthroughs: &'static str,
    pub timestamp: DateTime<Utc>,
    pub status: &'static str,
}

/// Response to `GET /system-status`.
#[derive(Debug, Serialize)]
pub struct SystemStatusResponse {
    pub quantum_processor: &'static str,
    pub api_throughput: &'static str,
    pub security_level: &'static str,
    pub simulator_backends: &'static str,
    pub uptime: &'static str,
}

impl Default for SystemStatusResponse {
    fn default() -> Self {
        Self {
            quantum_processor: "online",
            api_throughput: "1.2M requests/sec",
            security_level: "quantum_encrypted",
            simulator_backends: "statevector simulator ready",
            uptime: "99.99%",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_request_defaults() {
        let req: SimulationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.qubits, 2);
        assert_eq!(req.gates, vec!["h", "cx"]);
    }

    #[test]
    fn test_execute_request_entanglement() {
        let req: ExecuteRequest =
            serde_json::from_str(r#"{"qubits": 4, "entanglement": "hadamard_first"}"#).unwrap();
        assert_eq!(req.qubits, 4);
        assert_eq!(req.shots, None);
        assert_eq!(req.entanglement, Entanglement::HadamardFirst);

        assert!(serde_json::from_str::<ExecuteRequest>(r#"{"entanglement": "bogus"}"#).is_err());
    }

    #[test]
    fn test_create_circuit_request_requires_name() {
        assert!(
            serde_json::from_str::<CreateCircuitRequest>(r#"{"qubits": 2, "depth": 1}"#).is_err()
        );

        let req: CreateCircuitRequest =
            serde_json::from_str(r#"{"name": "n", "qubits": 2, "depth": 1}"#).unwrap();
        assert!(req.gates_used.is_empty());
    }
}

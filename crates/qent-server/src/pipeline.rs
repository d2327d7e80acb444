//! Build, simulate and persist: the work behind the simulation endpoints.

use qent_ir::{Circuit, CircuitBuilder, builder::validate_qubit_count};
use qent_sim::{Counts, SimulationReport, Simulator};
use qent_store::{NewCircuit, Outcome};
use tracing::{debug, info, instrument};

use crate::dto::{ExecuteRequest, ExecuteResponse, SimulationRequest, SimulationResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Validate a requested qubit count against the configured limit.
pub fn check_qubits(qubits: i64, max_qubits: u32) -> Result<u32, ApiError> {
    let n = validate_qubit_count(qubits)?;
    if n > max_qubits {
        return Err(ApiError::InvalidCircuitSpec(format!(
            "{n} qubits requested but at most {max_qubits} are supported"
        )));
    }
    Ok(n)
}

/// Validate a requested shot count against the configured limit.
pub fn check_shots(shots: i64, max_shots: u32) -> Result<u32, ApiError> {
    match u32::try_from(shots) {
        Ok(s) if (1..=max_shots).contains(&s) => Ok(s),
        _ => Err(ApiError::InvalidCircuitSpec(format!(
            "shots must be in 1..={max_shots}, got {shots}"
        ))),
    }
}

async fn run_blocking<T, F>(job: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ApiError::SimulationFailure(e.to_string()))?
}

/// Build the requested circuit, then report its exact state and sampled counts.
///
/// Nothing is persisted.
#[instrument(skip(state, req), fields(qubits = req.qubits))]
pub async fn simulate(
    state: &AppState,
    req: SimulationRequest,
) -> Result<SimulationResponse, ApiError> {
    let qubits = check_qubits(req.qubits, state.config.max_qubits)?;
    let built = CircuitBuilder::declarative("request", req.qubits, &req.gates)?;

    let simulator = state.simulator.clone();
    let shots = state.config.default_shots;
    let report: SimulationReport =
        run_blocking(move || Ok(simulator.run(&built.circuit, shots)?)).await?;

    Ok(SimulationResponse {
        circuit_depth: report.depth,
        qubits,
        gates_used: report.gates_used,
        statevector: report.statevector.to_amplitudes(),
        measurement_counts: report.counts,
        success: true,
    })
}

/// Build the canonical entangling circuit, sample it and persist circuit and result.
///
/// The persisted circuit is the measured one, so its depth and gate list
/// include the barrier and measurements.
#[instrument(skip(state, req), fields(qubits = req.qubits))]
pub async fn execute(state: &AppState, req: ExecuteRequest) -> Result<ExecuteResponse, ApiError> {
    let qubits = check_qubits(req.qubits, state.config.max_qubits)?;
    let shots = match req.shots {
        Some(s) => check_shots(s, state.config.max_shots)?,
        None => state.config.default_shots,
    };

    let name = format!("Auto_Circuit_{qubits}Q");
    let built = CircuitBuilder::entangled(name.as_str(), req.qubits, req.entanglement)?;
    let measured = built.circuit.measured()?;

    let simulator = state.simulator.clone();
    let (measured, counts) = run_blocking(move || sample(&simulator, measured, shots)).await?;

    let record = NewCircuit {
        name,
        qubits,
        depth: depth_u32(measured.depth())?,
        gates_used: measured
            .gate_trace()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    let outcome = Outcome::Counts(counts.clone());
    let (circuit_id, result_id) = state
        .store
        .create_circuit_with_result(&record, shots, &outcome)
        .await?;

    info!(
        "Executed {} ({} shots) as circuit {} / result {}",
        record.name, shots, circuit_id, result_id
    );
    if let Some((bitstring, hits)) = counts.most_frequent() {
        debug!("Most frequent outcome of circuit {}: {} ({} hits)", circuit_id, bitstring, hits);
    }

    Ok(ExecuteResponse {
        circuit_id,
        qubits,
        shots,
        results: counts,
        depth: measured.depth(),
        success: true,
    })
}

fn sample(
    simulator: &Simulator,
    measured: Circuit,
    shots: u32,
) -> Result<(Circuit, Counts), ApiError> {
    let counts = simulator.counts(&measured, shots)?;
    Ok((measured, counts))
}

fn depth_u32(depth: usize) -> Result<u32, ApiError> {
    u32::try_from(depth)
        .map_err(|_| ApiError::SimulationFailure(format!("circuit depth {depth} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn state() -> AppState {
        let config = ServerConfig {
            in_memory: true,
            seed: Some(11),
            ..ServerConfig::default()
        };
        AppState::open(config).unwrap()
    }

    #[test]
    fn test_check_qubits() {
        assert_eq!(check_qubits(3, 20).unwrap(), 3);
        assert!(matches!(check_qubits(0, 20), Err(ApiError::InvalidCircuitSpec(_))));
        assert!(matches!(check_qubits(-2, 20), Err(ApiError::InvalidCircuitSpec(_))));
        assert!(matches!(check_qubits(21, 20), Err(ApiError::InvalidCircuitSpec(_))));
    }

    #[test]
    fn test_check_shots() {
        assert_eq!(check_shots(1, 10).unwrap(), 1);
        assert_eq!(check_shots(10, 10).unwrap(), 10);
        assert!(check_shots(0, 10).is_err());
        assert!(check_shots(11, 10).is_err());
        assert!(check_shots(-5, 10).is_err());
        assert!(check_shots(i64::MAX, u32::MAX).is_err());
    }

    #[tokio::test]
    async fn test_simulate_defaults() {
        let resp = simulate(&state(), SimulationRequest::default()).await.unwrap();
        assert_eq!(resp.circuit_depth, 2);
        assert_eq!(resp.gates_used, vec!["h", "cx"]);
        assert_eq!(resp.statevector.len(), 4);
        assert_eq!(resp.measurement_counts.total_shots(), 1024);
    }

    #[tokio::test]
    async fn test_execute_persists_measured_circuit() {
        let state = state();
        let req = ExecuteRequest {
            qubits: 3,
            shots: Some(100),
            ..ExecuteRequest::default()
        };
        let resp = execute(&state, req).await.unwrap();
        assert_eq!(resp.results.total_shots(), 100);
        assert_eq!(resp.depth, 4);

        let circuits = state.store.list_circuits().await.unwrap();
        assert_eq!(circuits[0].id, resp.circuit_id);
        assert_eq!(circuits[0].name, "Auto_Circuit_3Q");
        assert_eq!(
            circuits[0].gates_used,
            vec!["h", "h", "h", "cx", "cx", "barrier", "measure", "measure", "measure"]
        );
        assert_eq!(circuits[0].depth, 4);
    }

    #[tokio::test]
    async fn test_execute_rejects_zero_shots_without_persisting() {
        let state = state();
        let req = ExecuteRequest {
            shots: Some(0),
            ..ExecuteRequest::default()
        };
        assert!(matches!(
            execute(&state, req).await,
            Err(ApiError::InvalidCircuitSpec(_))
        ));
        assert_eq!(state.store.count_circuits().await.unwrap(), 0);
    }
}

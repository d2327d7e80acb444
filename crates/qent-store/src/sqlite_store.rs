//! SQLite-based persistence for production use.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::record::{CircuitRecord, JoinedResult, Metric, NewCircuit, NewResult, Outcome};
use crate::store::CircuitStore;

/// Metrics inserted when the schema is first created.
pub const SEED_METRICS: [(&str, f64); 3] = [
    ("revenue_growth", 45.0),
    ("quantum_adoption", 68.0),
    ("client_satisfaction", 94.0),
];

/// SQLite-based circuit store.
///
/// A single connection guarded by a mutex, so writes are serialized and
/// transactions never interleave.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a store at the given path, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema_sync()?;
        info!("Opened circuit store at {}", path.display());
        Ok(store)
    }

    /// Create a new in-memory store.
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema_sync()?;
        Ok(store)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }

    fn init_schema_sync(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS quantum_circuits (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                qubits INTEGER NOT NULL,
                depth INTEGER NOT NULL,
                gates_used TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS quantum_results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                circuit_id INTEGER NOT NULL,
                shots INTEGER NOT NULL,
                results TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY (circuit_id) REFERENCES quantum_circuits(id)
            );

            CREATE INDEX IF NOT EXISTS idx_circuits_created_at ON quantum_circuits(created_at);
            CREATE INDEX IF NOT EXISTS idx_results_created_at ON quantum_results(created_at);
            CREATE INDEX IF NOT EXISTS idx_results_circuit_id ON quantum_results(circuit_id);

            CREATE TABLE IF NOT EXISTS business_metrics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                metric_name TEXT NOT NULL UNIQUE,
                value REAL NOT NULL,
                timestamp TEXT NOT NULL
            );
            "#,
        )?;

        let now = timestamp(Utc::now());
        for (name, value) in SEED_METRICS {
            conn.execute(
                "INSERT OR IGNORE INTO business_metrics (metric_name, value, timestamp) VALUES (?1, ?2, ?3)",
                rusqlite::params![name, value, now],
            )?;
        }
        Ok(())
    }
}

/// Fixed-width RFC 3339 so text ordering matches time ordering.
fn timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::DatabaseError(format!("bad timestamp '{s}': {e}")))
}

fn insert_circuit(conn: &Connection, circuit: &NewCircuit) -> StoreResult<i64> {
    let gates_used = serde_json::to_string(&circuit.gates_used)?;
    conn.execute(
        r#"
        INSERT INTO quantum_circuits (name, qubits, depth, gates_used, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        rusqlite::params![
            circuit.name,
            circuit.qubits,
            circuit.depth,
            gates_used,
            timestamp(Utc::now()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn insert_result(
    conn: &Connection,
    circuit_id: i64,
    shots: u32,
    outcome: &Outcome,
) -> StoreResult<i64> {
    outcome.validate(shots)?;

    let exists = conn
        .query_row(
            "SELECT 1 FROM quantum_circuits WHERE id = ?1",
            rusqlite::params![circuit_id],
            |_| Ok(()),
        )
        .optional()?;
    if exists.is_none() {
        return Err(StoreError::ForeignKeyViolation { circuit_id });
    }

    let results = serde_json::to_string(outcome)?;
    conn.execute(
        r#"
        INSERT INTO quantum_results (circuit_id, shots, results, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        rusqlite::params![circuit_id, shots, results, timestamp(Utc::now())],
    )?;
    Ok(conn.last_insert_rowid())
}

#[async_trait]
impl CircuitStore for SqliteStore {
    async fn create_circuit(&self, circuit: &NewCircuit) -> StoreResult<i64> {
        let conn = self.lock()?;
        let id = insert_circuit(&conn, circuit)?;
        debug!("Persisted circuit {} ({})", id, circuit.name);
        Ok(id)
    }

    async fn list_circuits(&self) -> StoreResult<Vec<CircuitRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, qubits, depth, gates_used, created_at
            FROM quantum_circuits
            ORDER BY created_at DESC, id DESC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, u32>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;
        let mut circuits = Vec::new();
        for row in rows {
            let (id, name, qubits, depth, gates_used, created_at) = row?;
            circuits.push(CircuitRecord {
                id,
                name,
                qubits,
                depth,
                gates_used: serde_json::from_str(&gates_used)?,
                created_at: parse_timestamp(&created_at)?,
            });
        }
        Ok(circuits)
    }

    async fn count_circuits(&self) -> StoreResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM quantum_circuits", [], |row| {
            row.get(0)
        })?;
        Ok(count.max(0) as u64)
    }

    async fn create_result(&self, result: &NewResult) -> StoreResult<i64> {
        let conn = self.lock()?;
        let id = insert_result(&conn, result.circuit_id, result.shots, &result.outcome)?;
        debug!("Persisted result {} for circuit {}", id, result.circuit_id);
        Ok(id)
    }

    async fn create_circuit_with_result(
        &self,
        circuit: &NewCircuit,
        shots: u32,
        outcome: &Outcome,
    ) -> StoreResult<(i64, i64)> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let circuit_id = insert_circuit(&tx, circuit)?;
        let result_id = insert_result(&tx, circuit_id, shots, outcome)?;
        tx.commit()?;

        debug!(
            "Persisted circuit {} with result {} ({} shots)",
            circuit_id, result_id, shots
        );
        Ok((circuit_id, result_id))
    }

    async fn list_results_joined(&self) -> StoreResult<Vec<JoinedResult>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT r.id, r.circuit_id, c.name, c.qubits, r.shots, r.results, r.created_at
            FROM quantum_results r
            JOIN quantum_circuits c ON c.id = r.circuit_id
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, u32>(3)?,
                row.get::<_, u32>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;

        let mut results = Vec::new();
        for row in rows {
            let (id, circuit_id, circuit_name, qubits, shots, data, created_at) = row?;
            results.push(JoinedResult {
                id,
                circuit_id,
                circuit_name,
                qubits,
                shots,
                results: serde_json::from_str(&data)?,
                created_at: parse_timestamp(&created_at)?,
            });
        }
        Ok(results)
    }

    async fn list_metrics(&self) -> StoreResult<Vec<Metric>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT metric_name, value, timestamp FROM business_metrics ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut metrics = Vec::new();
        for row in rows {
            let (name, value, ts) = row?;
            metrics.push(Metric {
                name,
                value,
                timestamp: parse_timestamp(&ts)?,
            });
        }
        Ok(metrics)
    }

    async fn set_metric(&self, name: &str, value: f64) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO business_metrics (metric_name, value, timestamp)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(metric_name) DO UPDATE SET value = excluded.value, timestamp = excluded.timestamp
            "#,
            rusqlite::params![name, value, timestamp(Utc::now())],
        )?;
        Ok(())
    }
}

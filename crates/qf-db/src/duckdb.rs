//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::{Database, QueryResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use duckdb::types::{TimeUnit, Value, ValueRef};
use duckdb::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Day number of 1970-01-01 counted from 0001-01-01 as day 1.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// DuckDB database backend
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(sql).map_err(DbError::from)
    }

    /// Collect all rows, then read column metadata.
    ///
    /// DuckDB panics on `stmt.column_count()` before the statement has run.
    fn query_sync(&self, sql: &str) -> DbResult<QueryResult> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(strip_terminator(sql))?;

        let rows: Vec<Vec<serde_json::Value>> = stmt
            .query_map([], |row| {
                let col_count = row.as_ref().column_count();
                (0..col_count)
                    .map(|i| row.get_ref(i).map(json_value))
                    .collect::<duckdb::Result<Vec<_>>>()
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let columns = (0..stmt.column_count())
            .map(|i| stmt.column_name(i).map_or("?".to_string(), |v| v.to_string()))
            .collect();

        Ok(QueryResult { columns, rows })
    }

    fn query_count_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM ({})", strip_terminator(sql)),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

/// Canned query files usually end with `;`, which breaks subquery wrapping.
fn strip_terminator(sql: &str) -> &str {
    sql.trim_end().trim_end_matches(';').trim_end()
}

/// Convert one DuckDB cell to JSON.
///
/// Numbers stay numbers, temporal types become ISO 8601 strings, decimals
/// become floats. Anything without a natural JSON form is rendered as text.
fn json_value(value: ValueRef<'_>) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        ValueRef::Null => Json::Null,
        ValueRef::Boolean(b) => Json::Bool(b),
        ValueRef::TinyInt(n) => Json::from(n),
        ValueRef::SmallInt(n) => Json::from(n),
        ValueRef::Int(n) => Json::from(n),
        ValueRef::BigInt(n) => Json::from(n),
        ValueRef::HugeInt(n) => i64::try_from(n)
            .map(Json::from)
            .unwrap_or_else(|_| Json::String(n.to_string())),
        ValueRef::UTinyInt(n) => Json::from(n),
        ValueRef::USmallInt(n) => Json::from(n),
        ValueRef::UInt(n) => Json::from(n),
        ValueRef::UBigInt(n) => Json::from(n),
        ValueRef::Float(f) => Json::from(f64::from(f)),
        ValueRef::Double(f) => Json::from(f),
        ValueRef::Decimal(d) => {
            let text = d.to_string();
            text.parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Json::Number)
                .unwrap_or(Json::String(text))
        }
        ValueRef::Text(bytes) => Json::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Date32(days) => days
            .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(|d| Json::String(d.format("%Y-%m-%d").to_string()))
            .unwrap_or(Json::from(days)),
        ValueRef::Timestamp(unit, raw) => DateTime::from_timestamp_micros(to_micros(unit, raw))
            .map(|dt| Json::String(dt.naive_utc().format("%Y-%m-%dT%H:%M:%S%.f").to_string()))
            .unwrap_or(Json::from(raw)),
        ValueRef::Time64(unit, raw) => time_of_day(to_micros(unit, raw))
            .map(|t| Json::String(t.format("%H:%M:%S%.f").to_string()))
            .unwrap_or(Json::from(raw)),
        other => Json::String(format!("{:?}", Value::from(other))),
    }
}

fn to_micros(unit: TimeUnit, raw: i64) -> i64 {
    match unit {
        TimeUnit::Second => raw.saturating_mul(1_000_000),
        TimeUnit::Millisecond => raw.saturating_mul(1_000),
        TimeUnit::Microsecond => raw,
        TimeUnit::Nanosecond => raw / 1_000,
    }
}

fn time_of_day(micros: i64) -> Option<NaiveTime> {
    let secs = u32::try_from(micros.div_euclid(1_000_000)).ok()?;
    let nanos = u32::try_from(micros.rem_euclid(1_000_000) * 1_000).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn query(&self, sql: &str) -> DbResult<QueryResult> {
        self.query_sync(sql)
    }

    async fn query_count(&self, sql: &str) -> DbResult<usize> {
        self.query_count_sync(sql)
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;

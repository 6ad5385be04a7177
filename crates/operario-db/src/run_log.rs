//! Persistence of robot run outcomes.

use crate::error::{DatabaseError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

/// Outcome of one robot execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRecord {
    /// Process (robot) name.
    pub process: String,
    /// Execution mode string (`production`, `develop`, `test`).
    pub mode: String,
    /// When the run finished.
    pub executed_at: DateTime<Utc>,
    /// Items the run was supposed to process.
    pub total_count: i64,
    /// Items processed successfully.
    pub success_count: i64,
    /// Whether the run ended in failure.
    pub fail: bool,
    /// Failure message, when the run failed.
    pub message: Option<String>,
}

/// Insert one run record, returning its row id.
pub async fn insert_run(pool: &SqlitePool, record: &RunRecord) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO run_log (process, mode, executed_at, total_count, success_count, fail, message)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.process)
    .bind(&record.mode)
    .bind(record.executed_at.to_rfc3339())
    .bind(record.total_count)
    .bind(record.success_count)
    .bind(i64::from(record.fail))
    .bind(&record.message)
    .execute(pool)
    .await?;

    tracing::debug!(process = %record.process, fail = record.fail, "run recorded");
    Ok(result.last_insert_rowid())
}

/// The most recent runs of a process, newest first.
pub async fn recent_runs(pool: &SqlitePool, process: &str, limit: i64) -> Result<Vec<RunRecord>> {
    let rows = sqlx::query(
        "SELECT process, mode, executed_at, total_count, success_count, fail, message
         FROM run_log WHERE process = ? ORDER BY executed_at DESC, id DESC LIMIT ?",
    )
    .bind(process)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let executed_at: String = row.get("executed_at");
            let executed_at = DateTime::parse_from_rfc3339(&executed_at)
                .map_err(|_| DatabaseError::InvalidTimestamp(executed_at))?
                .with_timezone(&Utc);
            Ok(RunRecord {
                process: row.get("process"),
                mode: row.get("mode"),
                executed_at,
                total_count: row.get("total_count"),
                success_count: row.get("success_count"),
                fail: row.get::<i64, _>("fail") != 0,
                message: row.get("message"),
            })
        })
        .collect()
}

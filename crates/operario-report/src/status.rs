//! The execution status payload.

use chrono::{DateTime, SecondsFormat, Utc};
use operario_core::{ExecutionMode, RobotName};
use serde::Serialize;

/// Processed/succeeded counters for one run.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionCounts {
    /// Items the run was supposed to process.
    pub total_count: i64,
    /// Items processed successfully.
    pub success_count: i64,
}

/// End-of-run status payload posted to the execution webhook.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
    /// Robot name.
    pub process_name: String,
    /// When the run finished, ISO-8601.
    pub date_time: String,
    /// Execution mode string.
    pub mode: String,
    /// Run counters.
    pub parameters: ExecutionCounts,
    /// Whether the run is considered failed. A run that raised no error
    /// but processed fewer items than expected still counts as failed.
    pub fail: bool,
}

impl ExecutionStatus {
    /// Build a status for a run finishing now.
    #[must_use]
    pub fn new(
        robot: &RobotName,
        mode: ExecutionMode,
        counts: ExecutionCounts,
        errored: bool,
    ) -> Self {
        Self::at(robot, mode, counts, errored, Utc::now())
    }

    /// Build a status with an explicit finish time.
    #[must_use]
    pub fn at(
        robot: &RobotName,
        mode: ExecutionMode,
        counts: ExecutionCounts,
        errored: bool,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            process_name: robot.as_str().to_string(),
            date_time: finished_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            mode: mode.as_str().to_string(),
            parameters: counts,
            fail: errored || counts.success_count < counts.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn robot() -> RobotName {
        RobotName::new("nfe-processor").expect("valid name")
    }

    #[test]
    fn test_serialized_field_names() {
        let counts = ExecutionCounts {
            total_count: 10,
            success_count: 10,
        };
        let finished = Utc.with_ymd_and_hms(2026, 8, 1, 14, 30, 0).unwrap();
        let status = ExecutionStatus::at(&robot(), ExecutionMode::Production, counts, false, finished);

        let json = serde_json::to_value(&status).expect("serialize status");
        assert_eq!(json["processName"], "nfe-processor");
        assert_eq!(json["mode"], "production");
        assert_eq!(json["parameters"]["totalCount"], 10);
        assert_eq!(json["parameters"]["successCount"], 10);
        assert_eq!(json["fail"], false);
        assert_eq!(json["dateTime"], "2026-08-01T14:30:00Z");
    }

    #[test]
    fn test_shortfall_counts_as_failure() {
        let counts = ExecutionCounts {
            total_count: 10,
            success_count: 7,
        };
        let status = ExecutionStatus::new(&robot(), ExecutionMode::Production, counts, false);
        assert!(status.fail);
    }

    #[test]
    fn test_errored_run_is_failure_even_with_full_counts() {
        let counts = ExecutionCounts {
            total_count: 5,
            success_count: 5,
        };
        let status = ExecutionStatus::new(&robot(), ExecutionMode::Production, counts, true);
        assert!(status.fail);
    }
}

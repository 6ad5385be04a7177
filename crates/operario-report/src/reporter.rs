//! Webhook delivery and warehouse recording of run outcomes.

use crate::error::ReportResult;
use crate::status::{ExecutionCounts, ExecutionStatus};
use chrono::Utc;
use operario_core::{DeviceInfo, ExecutionMode, RobotName, WebhookConfig};
use operario_db::{insert_run, RunRecord, Warehouse};
use serde::Serialize;
use std::time::Duration;

/// Failure message payload posted to the failure webhook.
#[derive(Debug, Clone, Serialize)]
pub struct FailurePayload {
    /// Robot name.
    pub bot: String,
    /// What went wrong.
    pub error_message: String,
    /// Where it ran.
    pub device_info: DevicePayload,
}

/// Device block of a [`FailurePayload`].
#[derive(Debug, Clone, Serialize)]
pub struct DevicePayload {
    /// OS user.
    pub user: String,
    /// Machine hostname.
    pub hostname: String,
    /// Local IP, when detected.
    pub ip_address: Option<String>,
}

impl From<DeviceInfo> for DevicePayload {
    fn from(info: DeviceInfo) -> Self {
        Self {
            user: info.user,
            hostname: info.hostname,
            ip_address: info.local_ip,
        }
    }
}

/// Reports run outcomes: always to the log and the local warehouse,
/// and to the configured webhooks when running in production.
pub struct ExecutionReporter {
    client: reqwest::Client,
    webhooks: WebhookConfig,
    robot: RobotName,
    mode: ExecutionMode,
}

impl ExecutionReporter {
    /// Build a reporter.
    pub fn new(
        robot: RobotName,
        mode: ExecutionMode,
        webhooks: WebhookConfig,
    ) -> ReportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            client,
            webhooks,
            robot,
            mode,
        })
    }

    /// Report the end of a run.
    ///
    /// The outcome is logged and recorded in the warehouse (when one is
    /// given); warehouse failures propagate. The webhook post happens only
    /// in production and is best-effort: delivery problems are logged as
    /// warnings, the run outcome does not change because a webhook was
    /// down.
    pub async fn report(
        &self,
        counts: ExecutionCounts,
        errored: bool,
        warehouse: Option<&Warehouse>,
    ) -> ReportResult<()> {
        let status = ExecutionStatus::new(&self.robot, self.mode, counts, errored);
        tracing::info!(
            process = %status.process_name,
            total = counts.total_count,
            success = counts.success_count,
            fail = status.fail,
            "execution finished"
        );

        if let Some(warehouse) = warehouse {
            let record = RunRecord {
                process: status.process_name.clone(),
                mode: status.mode.clone(),
                executed_at: Utc::now(),
                total_count: counts.total_count,
                success_count: counts.success_count,
                fail: status.fail,
                message: None,
            };
            insert_run(warehouse.pool(), &record).await?;
        }

        if !self.mode.is_production() {
            tracing::info!(mode = %self.mode, "skipping status webhook outside production");
            return Ok(());
        }
        match &self.webhooks.execution_status {
            Some(url) => self.post_best_effort(url, &status, "execution status").await,
            None => tracing::debug!("no execution status webhook configured"),
        }
        Ok(())
    }

    /// Post a failure message to the failure webhook, best-effort.
    pub async fn report_failure(&self, message: &str) {
        if !self.mode.is_production() {
            tracing::info!(
                robot = %self.robot,
                mode = %self.mode,
                message,
                "skipping failure webhook outside production"
            );
            return;
        }
        let Some(url) = &self.webhooks.failure else {
            tracing::warn!("no failure webhook configured");
            return;
        };

        let payload = FailurePayload {
            bot: self.robot.as_str().to_string(),
            error_message: message.to_string(),
            device_info: DeviceInfo::detect().into(),
        };
        self.post_best_effort(url, &payload, "failure message").await;
    }

    async fn post_best_effort<T: Serialize>(&self, url: &str, payload: &T, what: &str) {
        let result = self.client.post(url).json(payload).send().await;
        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!(what, "webhook delivered");
            }
            Ok(response) => {
                tracing::warn!(what, status = %response.status(), "webhook rejected");
            }
            Err(err) => {
                tracing::warn!(what, error = %err, "webhook delivery failed");
            }
        }
    }
}

//! Failure notification emails.
//!
//! When a robot dies, operators get one email identifying the machine, the
//! process and the error, with the day's log file attached when available.

use crate::error::MailResult;
use crate::sender::{EmailMessage, Mailer};
use chrono::Local;
use operario_core::{DeviceInfo, EmailConfig, ExecutionMode, RobotName};
use std::path::Path;

/// Sends the standard "Apresentou Erro" notification.
pub struct FailureNotifier {
    mailer: Mailer,
    robot: RobotName,
    mode: ExecutionMode,
    recipients: Vec<String>,
}

impl FailureNotifier {
    /// Build a notifier from resolved email config.
    pub fn new(config: &EmailConfig, robot: RobotName, mode: ExecutionMode) -> MailResult<Self> {
        Ok(Self {
            mailer: Mailer::new(config)?,
            robot,
            mode,
            recipients: config.failure_recipients.clone(),
        })
    }

    /// Send the failure notification, attaching `log_file` when given.
    ///
    /// Best-effort by design of the caller's error path: with no recipients
    /// configured, or outside production mode, the notification is logged
    /// and skipped rather than failed.
    pub async fn notify(&self, error: &str, log_file: Option<&Path>) -> MailResult<()> {
        if !self.mode.is_production() {
            tracing::info!(
                robot = %self.robot,
                mode = %self.mode,
                "skipping failure email outside production"
            );
            return Ok(());
        }
        if self.recipients.is_empty() {
            tracing::warn!(robot = %self.robot, "no failure recipients configured");
            return Ok(());
        }

        let device = DeviceInfo::detect();
        let timestamp = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
        let mut message = EmailMessage::new(
            self.recipients.clone(),
            format_subject(&device, &self.robot),
            format_body(&device, &self.robot, error, &timestamp),
        );
        if let Some(path) = log_file {
            message = message.with_attachment(path);
        }
        self.mailer.send(&message).await
    }
}

/// `IP:ROBOT (Apresentou Erro)`, hostname when no IP was detected.
fn format_subject(device: &DeviceInfo, robot: &RobotName) -> String {
    let host = device
        .local_ip
        .clone()
        .unwrap_or_else(|| device.hostname.clone());
    format!("{host}:{} (Apresentou Erro)", robot.to_uppercase())
}

fn format_body(device: &DeviceInfo, robot: &RobotName, error: &str, timestamp: &str) -> String {
    let ip = device.local_ip.as_deref().unwrap_or("desconhecido");
    format!(
        "O robô {robot} apresentou erro durante a execução.\n\n\
         Usuário: {user}\n\
         Máquina: {hostname} ({ip})\n\
         Data/Hora: {timestamp}\n\n\
         Erro:\n{error}\n",
        robot = robot.as_str(),
        user = device.user,
        hostname = device.hostname,
    )
}

//! Operario Core - Foundation crate for the Operario RPA toolkit.
//!
//! This crate provides shared types, error handling, configuration management,
//! logging initialization and the bounded retry helper that all other Operario
//! crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`RobotName`, `ExecutionMode`)
//! - [`device`] - User, hostname and local IP of the current machine
//! - [`logging`] - Daily log files via tracing-subscriber
//! - [`retry`] - Bounded attempts helper for flaky operations
//!
//! # Example
//!
//! ```rust
//! use operario_core::{AppConfig, RobotName};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let robot = RobotName::new("nfe-processor")?;
//! assert_eq!(robot.as_str(), "nfe-processor");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod device;
pub mod error;
pub mod logging;
pub mod retry;
pub mod types;

// Re-export commonly used types
pub use config::{
    AppConfig, BrowserConfig, CaptchaConfig, EmailConfig, GeneralConfig, VaultConfig,
    WarehouseConfig, WebhookConfig,
};
pub use device::DeviceInfo;
pub use error::{ConfigError, ConfigResult, OperarioError, Result};
pub use logging::LogManager;
pub use retry::RetryPolicy;
pub use types::{ExecutionMode, RobotName};

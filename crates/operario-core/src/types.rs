//! Shared types used across the Operario toolkit.
//!
//! This module defines common newtypes and enums that provide type safety
//! and clear domain modeling.

use crate::error::OperarioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Newtype for robot/process names with validation.
///
/// Robot names end up in log directories, email subjects and webhook
/// payloads, so they are restricted to alphanumerics, hyphens and
/// underscores, 1-64 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotName(String);

impl RobotName {
    /// Create a new `RobotName` from a string.
    ///
    /// # Errors
    /// Returns error if the name is empty, too long or contains characters
    /// that are unsafe in file paths.
    pub fn new(name: impl Into<String>) -> Result<Self, OperarioError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name uppercased, as used in notification subjects.
    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }

    fn validate(name: &str) -> Result<(), OperarioError> {
        static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = NAME_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,63}$").expect("valid regex"));

        if regex.is_match(name) {
            Ok(())
        } else {
            Err(OperarioError::Validation(format!(
                "invalid robot name: must be 1-64 alphanumeric/hyphen/underscore characters, got '{name}'"
            )))
        }
    }
}

impl fmt::Display for RobotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mode a robot process runs in.
///
/// Non-production modes short-circuit outward-facing side effects
/// (webhooks, failure mails) and only log them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Live run: all collaborators are called for real.
    Production,
    /// Development run: outward side effects are logged, not sent.
    Develop,
    /// Test run: same gating as develop, used by automated tests.
    Test,
}

impl ExecutionMode {
    /// String form used in config files and webhook payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Develop => "develop",
            Self::Test => "test",
        }
    }

    /// Whether outward-facing side effects should actually be performed.
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = OperarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "develop" | "dev" => Ok(Self::Develop),
            "test" => Ok(Self::Test),
            other => Err(OperarioError::Validation(format!(
                "invalid execution mode: expected production/develop/test, got '{other}'"
            ))),
        }
    }
}

impl Default for ExecutionMode {
    fn default() -> Self {
        Self::Develop
    }
}

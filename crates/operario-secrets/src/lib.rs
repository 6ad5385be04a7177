//! Operario Secrets - credential resolution for robots.
//!
//! Robots need SMTP passwords, portal logins and API keys at startup.
//! This crate resolves them by name from a REST key vault, with the
//! process environment and caller-supplied defaults as fallbacks, and
//! keeps resolved values in zeroizing containers that redact themselves
//! when debug-printed.
//!
//! # Example
//!
//! ```no_run
//! use operario_secrets::{CachedResolver, EnvResolver};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), operario_secrets::SecretError> {
//! let secrets = CachedResolver::new(Arc::new(EnvResolver));
//! let password = secrets
//!     .get_with_fallback("smtp-password", None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod cached;
pub mod error;
pub mod resolver;
pub mod value;
pub mod vault;

pub use cached::CachedResolver;
pub use error::{SecretError, SecretResult};
pub use resolver::{EnvResolver, SecretResolver};
pub use value::SecretValue;
pub use vault::VaultClient;

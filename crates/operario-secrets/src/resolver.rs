//! The resolver trait and the environment-variable source.

use crate::error::{SecretError, SecretResult};
use crate::value::SecretValue;
use async_trait::async_trait;

/// A source of named secrets.
#[async_trait]
pub trait SecretResolver: Send + Sync {
    /// Resolve `name` to its value.
    async fn get(&self, name: &str) -> SecretResult<SecretValue>;
}

/// Resolves secrets from process environment variables.
///
/// Vault secret names use hyphens (`smtp-password`) while environment
/// variables use underscores, so the exact name is tried first and the
/// hyphens-to-underscores form second.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvResolver;

#[async_trait]
impl SecretResolver for EnvResolver {
    async fn get(&self, name: &str) -> SecretResult<SecretValue> {
        let candidates = [name.to_string(), name.replace('-', "_")];
        for candidate in &candidates {
            if let Ok(value) = std::env::var(candidate) {
                tracing::debug!(secret = name, source = "env", "secret resolved");
                return Ok(SecretValue::new(value));
            }
        }
        Err(SecretError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_env_resolver_maps_hyphens() {
        std::env::set_var("smtp_password_test", "s3cret");
        let value = EnvResolver
            .get("smtp-password-test")
            .await
            .expect("resolve via underscore form");
        assert_eq!(value.expose(), "s3cret");
        std::env::remove_var("smtp_password_test");
    }

    #[tokio::test]
    async fn test_env_resolver_missing() {
        let err = EnvResolver
            .get("definitely-not-set-anywhere")
            .await
            .expect_err("missing secret");
        assert!(matches!(err, SecretError::NotFound(_)));
    }
}

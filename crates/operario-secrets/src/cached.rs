//! Caching resolver with environment and default fallback.

use crate::error::{SecretError, SecretResult};
use crate::resolver::{EnvResolver, SecretResolver};
use crate::value::SecretValue;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Wraps a primary resolver with an in-memory cache and a fallback chain.
///
/// Lookup order for [`get_with_fallback`](Self::get_with_fallback):
/// cache, primary resolver, environment (hyphens mapped to underscores),
/// then the caller-supplied default. Primary failures are logged and fall
/// through; only the end of the chain produces an error.
pub struct CachedResolver {
    primary: Arc<dyn SecretResolver>,
    env: EnvResolver,
    cache: RwLock<HashMap<String, SecretValue>>,
}

impl CachedResolver {
    /// Wrap a primary resolver.
    #[must_use]
    pub fn new(primary: Arc<dyn SecretResolver>) -> Self {
        Self {
            primary,
            env: EnvResolver,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve through the cache, consulting the primary on a miss.
    pub async fn get(&self, name: &str) -> SecretResult<SecretValue> {
        if let Some(value) = self.cache.read().await.get(name) {
            return Ok(value.clone());
        }
        let value = self.primary.get(name).await?;
        self.cache
            .write()
            .await
            .insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Resolve with the full fallback chain.
    pub async fn get_with_fallback(
        &self,
        name: &str,
        default: Option<&str>,
    ) -> SecretResult<SecretValue> {
        match self.get(name).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::warn!(secret = name, error = %err, "primary resolver failed, falling back");
            }
        }
        if let Ok(value) = self.env.get(name).await {
            return Ok(value);
        }
        match default {
            Some(value) => Ok(SecretValue::new(value)),
            None => Err(SecretError::NotFound(name.to_string())),
        }
    }

    /// Re-fetch from the primary, replacing any cached value.
    pub async fn refresh(&self, name: &str) -> SecretResult<SecretValue> {
        let value = self.primary.get(name).await?;
        self.cache
            .write()
            .await
            .insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Drop all cached values.
    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }
}

//! REST key-vault client.

use crate::error::{SecretError, SecretResult};
use crate::resolver::SecretResolver;
use crate::value::SecretValue;
use async_trait::async_trait;
use operario_core::VaultConfig;
use serde::Deserialize;
use std::time::Duration;

/// Shape of a vault `GET /secrets/{name}` response body.
#[derive(Debug, Deserialize)]
struct VaultSecret {
    value: String,
}

/// Client for an Azure-style REST key vault.
///
/// Secrets are fetched with
/// `GET {url}/secrets/{name}?api-version={version}` and a bearer token.
#[derive(Debug)]
pub struct VaultClient {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
    token: SecretValue,
}

impl VaultClient {
    /// Build a client from vault config and an access token.
    pub fn new(config: &VaultConfig, token: SecretValue) -> SecretResult<Self> {
        let base_url = config
            .url
            .clone()
            .ok_or(SecretError::NoVaultConfigured)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            token,
        })
    }
}

#[async_trait]
impl SecretResolver for VaultClient {
    async fn get(&self, name: &str) -> SecretResult<SecretValue> {
        let url = format!(
            "{}/secrets/{name}?api-version={}",
            self.base_url, self.api_version
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(self.token.expose())
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SecretError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(SecretError::Status {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let secret: VaultSecret = response
            .json()
            .await
            .map_err(|e| SecretError::MalformedResponse(e.to_string()))?;
        tracing::debug!(secret = name, source = "vault", "secret resolved");
        Ok(SecretValue::new(secret.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_vault_url() {
        let config = VaultConfig::default();
        assert!(matches!(
            VaultClient::new(&config, SecretValue::new("token")).expect_err("no url"),
            SecretError::NoVaultConfigured
        ));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = VaultConfig {
            url: Some("https://vault.example.com/".to_string()),
            ..VaultConfig::default()
        };
        let client = VaultClient::new(&config, SecretValue::new("token")).expect("build client");
        assert_eq!(client.base_url, "https://vault.example.com");
    }

    #[test]
    fn test_response_shape_parses() {
        let secret: VaultSecret =
            serde_json::from_str(r#"{"value":"s3cret","id":"https://v/secrets/x"}"#)
                .expect("parse vault response");
        assert_eq!(secret.value, "s3cret");
    }
}

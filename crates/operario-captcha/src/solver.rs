//! Client for the 2Captcha HTTP API.
//!
//! Tasks are submitted to `in.php` and answers polled from `res.php`;
//! both endpoints answer `{"status": 0|1, "request": "..."}` when asked
//! for JSON. A pending answer is status 0 with `CAPCHA_NOT_READY`; any
//! other status-0 request string is a service error code.

use crate::error::{CaptchaError, CaptchaResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use operario_core::CaptchaConfig;
use operario_secrets::SecretValue;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::time::{sleep, Instant};

const NOT_READY: &str = "CAPCHA_NOT_READY";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: u8,
    request: String,
}

/// Captcha solving client bound to one account.
#[derive(Debug)]
pub struct CaptchaSolver {
    client: reqwest::Client,
    config: CaptchaConfig,
    api_key: SecretValue,
}

impl CaptchaSolver {
    /// Build a solver from config and an API key.
    pub fn new(config: &CaptchaConfig, api_key: SecretValue) -> CaptchaResult<Self> {
        if api_key.is_empty() {
            return Err(CaptchaError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Solve a normal image captcha from a local file.
    pub async fn solve_image_file(&self, path: &Path) -> CaptchaResult<String> {
        let bytes = std::fs::read(path).map_err(|source| CaptchaError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "solving image captcha from file");
        self.solve_image_bytes(&bytes).await
    }

    /// Solve a normal image captcha, downloading the image first.
    pub async fn solve_image_url(&self, url: &str) -> CaptchaResult<String> {
        tracing::info!(url, "solving image captcha from url");
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        self.solve_image_bytes(&bytes).await
    }

    /// Solve a normal image captcha from raw image bytes.
    pub async fn solve_image_bytes(&self, image: &[u8]) -> CaptchaResult<String> {
        let params = vec![
            ("method".to_string(), "base64".to_string()),
            ("body".to_string(), BASE64.encode(image)),
        ];
        let id = self.submit(params).await?;
        self.poll(&id).await
    }

    /// Solve a reCAPTCHA v2 challenge, returning the response token.
    pub async fn solve_recaptcha_v2(
        &self,
        site_key: &str,
        page_url: &str,
        invisible: bool,
    ) -> CaptchaResult<String> {
        tracing::info!(page_url, invisible, "solving recaptcha v2");
        let id = self.submit(recaptcha_v2_params(site_key, page_url, invisible)).await?;
        self.poll(&id).await
    }

    /// Solve a reCAPTCHA v3 challenge, returning the response token.
    pub async fn solve_recaptcha_v3(
        &self,
        site_key: &str,
        page_url: &str,
        action: &str,
        min_score: f32,
    ) -> CaptchaResult<String> {
        tracing::info!(page_url, action, min_score, "solving recaptcha v3");
        let id = self
            .submit(recaptcha_v3_params(site_key, page_url, action, min_score))
            .await?;
        self.poll(&id).await
    }

    /// Account balance in USD.
    pub async fn balance(&self) -> CaptchaResult<f64> {
        let url = format!("{}/res.php", self.config.base_url);
        let response: ApiResponse = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.expose()),
                ("action", "getbalance"),
                ("json", "1"),
            ])
            .send()
            .await?
            .json()
            .await?;

        if response.status != 1 {
            return Err(CaptchaError::Api {
                code: response.request,
            });
        }
        response
            .request
            .parse()
            .map_err(|_| CaptchaError::MalformedResponse(response.request.clone()))
    }

    /// Submit a task to `in.php`, returning the task id.
    async fn submit(&self, params: Vec<(String, String)>) -> CaptchaResult<String> {
        let url = format!("{}/in.php", self.config.base_url);
        let mut form = params;
        form.push(("key".to_string(), self.api_key.expose().to_string()));
        form.push(("json".to_string(), "1".to_string()));

        let response: ApiResponse = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await?
            .json()
            .await?;

        if response.status != 1 {
            return Err(CaptchaError::Api {
                code: response.request,
            });
        }
        tracing::debug!(task_id = %response.request, "captcha task submitted");
        Ok(response.request)
    }

    /// Poll `res.php` until the answer arrives or the deadline passes.
    async fn poll(&self, id: &str) -> CaptchaResult<String> {
        let url = format!("{}/res.php", self.config.base_url);
        let started = Instant::now();
        sleep(Duration::from_secs(self.config.initial_wait_secs)).await;

        loop {
            let response: ApiResponse = self
                .client
                .get(&url)
                .query(&[
                    ("key", self.api_key.expose()),
                    ("action", "get"),
                    ("id", id),
                    ("json", "1"),
                ])
                .send()
                .await?
                .json()
                .await?;

            if response.status == 1 {
                tracing::info!(task_id = id, "captcha solved");
                return Ok(response.request);
            }
            if response.request != NOT_READY {
                return Err(CaptchaError::Api {
                    code: response.request,
                });
            }

            let waited = started.elapsed().as_secs();
            if waited >= self.config.solve_timeout_secs {
                return Err(CaptchaError::Timeout { waited_secs: waited });
            }
            sleep(Duration::from_secs(self.config.poll_interval_secs)).await;
        }
    }
}

fn recaptcha_v2_params(site_key: &str, page_url: &str, invisible: bool) -> Vec<(String, String)> {
    vec![
        ("method".to_string(), "userrecaptcha".to_string()),
        ("googlekey".to_string(), site_key.to_string()),
        ("pageurl".to_string(), page_url.to_string()),
        (
            "invisible".to_string(),
            if invisible { "1" } else { "0" }.to_string(),
        ),
    ]
}

fn recaptcha_v3_params(
    site_key: &str,
    page_url: &str,
    action: &str,
    min_score: f32,
) -> Vec<(String, String)> {
    vec![
        ("method".to_string(), "userrecaptcha".to_string()),
        ("version".to_string(), "v3".to_string()),
        ("googlekey".to_string(), site_key.to_string()),
        ("pageurl".to_string(), page_url.to_string()),
        ("action".to_string(), action.to_string()),
        ("min_score".to_string(), min_score.to_string()),
    ]
}

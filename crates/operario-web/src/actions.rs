//! Page-level interactions.

use crate::error::{WebError, WebResult};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use std::time::Duration;
use tokio::time::{sleep, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Interaction helpers around one page, with a shared wait deadline.
pub struct PageActions {
    page: Page,
    timeout: Duration,
}

impl PageActions {
    /// Wrap a page with the given default wait deadline.
    #[must_use]
    pub fn new(page: Page, timeout: Duration) -> Self {
        Self { page, timeout }
    }

    /// The underlying page, for protocol calls this wrapper doesn't cover.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate and wait for the load to settle.
    pub async fn navigate(&self, url: &str) -> WebResult<()> {
        tracing::debug!(url, "navigating");
        self.page
            .goto(url)
            .await
            .map_err(|e| WebError::Navigation(e.to_string()))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| WebError::Navigation(e.to_string()))?;
        Ok(())
    }

    /// Wait until `selector` matches, polling up to the deadline.
    pub async fn wait_for_selector(&self, selector: &str) -> WebResult<Element> {
        let started = Instant::now();
        loop {
            if let Ok(element) = self.page.find_element(selector).await {
                return Ok(element);
            }
            if started.elapsed() >= self.timeout {
                return Err(WebError::Timeout {
                    selector: selector.to_string(),
                    waited_ms: started.elapsed().as_millis() as u64,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Whether `selector` currently matches anything.
    pub async fn exists(&self, selector: &str) -> bool {
        self.page.find_element(selector).await.is_ok()
    }

    /// Wait for `selector` and click it.
    pub async fn click(&self, selector: &str) -> WebResult<()> {
        let element = self.wait_for_selector(selector).await?;
        element
            .click()
            .await
            .map_err(|e| WebError::Chromium(e.to_string()))?;
        Ok(())
    }

    /// Click through JavaScript instead of synthesized input.
    ///
    /// Some portals swallow devtools clicks on elements behind overlays;
    /// dispatching the click from the page itself gets through.
    pub async fn click_js(&self, selector: &str) -> WebResult<()> {
        self.wait_for_selector(selector).await?;
        self.evaluate(&js_click_snippet(selector)).await?;
        Ok(())
    }

    /// Wait for `selector`, focus it and type `value`.
    pub async fn set_text(&self, selector: &str, value: &str) -> WebResult<()> {
        let element = self.wait_for_selector(selector).await?;
        element
            .click()
            .await
            .map_err(|e| WebError::Chromium(e.to_string()))?;
        element
            .type_str(value)
            .await
            .map_err(|e| WebError::Chromium(e.to_string()))?;
        Ok(())
    }

    /// Inner text of the first match, empty string when the element has
    /// no text.
    pub async fn get_text(&self, selector: &str) -> WebResult<String> {
        let element = self.wait_for_selector(selector).await?;
        let text = element
            .inner_text()
            .await
            .map_err(|e| WebError::Chromium(e.to_string()))?;
        Ok(text.unwrap_or_default())
    }

    /// Evaluate a JavaScript expression on the page.
    pub async fn evaluate(&self, expression: &str) -> WebResult<serde_json::Value> {
        let result = self
            .page
            .evaluate(expression)
            .await
            .map_err(|e| WebError::Evaluate(e.to_string()))?;
        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }
}

/// Host part of a URL, for logging and per-portal bookkeeping.
pub fn extract_domain(url: &str) -> WebResult<String> {
    let parsed = url::Url::parse(url)
        .map_err(|e| WebError::Navigation(format!("invalid url: {e}")))?;
    parsed
        .host_str()
        .map(ToString::to_string)
        .ok_or_else(|| WebError::Navigation("no host in url".to_string()))
}

fn js_click_snippet(selector: &str) -> String {
    let escaped = selector.replace('\\', "\\\\").replace('\'', "\\'");
    format!("document.querySelector('{escaped}').click()")
}

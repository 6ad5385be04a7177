//! Browser process lifecycle.

use crate::actions::PageActions;
use crate::error::{WebError, WebResult};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::browser::{
    SetDownloadBehaviorBehavior, SetDownloadBehaviorParams,
};
use futures_util::stream::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A launched browser configured from [`operario_core::BrowserConfig`].
///
/// The devtools event handler runs on a background task for the life of
/// the driver; [`close`](Self::close) shuts both down.
pub struct Driver {
    browser: Browser,
    handler_task: JoinHandle<()>,
    config: operario_core::BrowserConfig,
}

impl Driver {
    /// Launch a browser with the robot's standard flags: window size,
    /// accept-language and headless mode from config, sandbox disabled
    /// for container deployments.
    pub async fn launch(config: &operario_core::BrowserConfig) -> WebResult<Self> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(config.window_width, config.window_height)
            .arg(format!("--lang={}", config.language))
            .arg("--disable-gpu");
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder
            .build()
            .map_err(WebError::Chromium)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| WebError::Chromium(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        tracing::info!(
            headless = config.headless,
            width = config.window_width,
            height = config.window_height,
            "browser launched"
        );
        Ok(Self {
            browser,
            handler_task,
            config: config.clone(),
        })
    }

    /// Open a new page at `url` and wrap it in [`PageActions`].
    ///
    /// When a download directory is configured, downloads on this page are
    /// routed there.
    pub async fn open(&self, url: &str) -> WebResult<PageActions> {
        let page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| WebError::Navigation(e.to_string()))?;

        if let Some(dir) = &self.config.download_dir {
            let params = SetDownloadBehaviorParams::builder()
                .behavior(SetDownloadBehaviorBehavior::Allow)
                .download_path(dir.to_string_lossy().into_owned())
                .build()
                .map_err(WebError::Chromium)?;
            page.execute(params)
                .await
                .map_err(|e| WebError::Chromium(e.to_string()))?;
        }

        Ok(PageActions::new(
            page,
            Duration::from_secs(self.config.navigation_timeout_secs),
        ))
    }

    /// Close the browser and stop the event handler.
    pub async fn close(mut self) -> WebResult<()> {
        self.browser
            .close()
            .await
            .map_err(|e| WebError::Chromium(e.to_string()))?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        tracing::info!("browser closed");
        Ok(())
    }
}

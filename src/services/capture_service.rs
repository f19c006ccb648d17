use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::constants::{
    DESKTOP_SCREENSHOT_FILE, DESKTOP_VIEWPORT, MOBILE_SCREENSHOT_FILE, MOBILE_VIEWPORT,
};
use crate::errors::{SitelensError, SitelensResult};
use crate::services::browser::{BrowserClient, CdpError, PageSession};
use crate::traits::page_capturer::PageCapturer;

/// Renders the target page at the desktop and mobile viewports and writes
/// one full-page PNG per viewport. The two captures run concurrently as a
/// fixed fan-out of two and are joined before the stage completes; either
/// failure fails the stage.
pub struct CaptureService {
    browser_endpoint: String,
}

impl CaptureService {
    pub fn new(browser_endpoint: String) -> Self {
        Self { browser_endpoint }
    }

    async fn capture_viewport(
        client: &Arc<BrowserClient>,
        url: &str,
        output_path: PathBuf,
        viewport: (u32, u32),
        mobile: bool,
    ) -> Result<(), CdpError> {
        let page = BrowserClient::open_page(client).await?;
        let captured = Self::render_and_snapshot(&page, url, &output_path, viewport, mobile).await;

        if let Err(e) = page.close().await {
            log::warn!("failed to close capture page target: {}", e);
        }

        captured
    }

    async fn render_and_snapshot(
        page: &PageSession,
        url: &str,
        output_path: &Path,
        (width, height): (u32, u32),
        mobile: bool,
    ) -> Result<(), CdpError> {
        page.set_viewport(width, height, mobile).await?;
        page.navigate(url).await?;
        page.wait_for_load().await?;

        let image = page.capture_screenshot().await?;
        tokio::fs::write(output_path, image).await?;

        log::info!("   🖼 {}", output_path.display());
        Ok(())
    }
}

#[async_trait]
impl PageCapturer for CaptureService {
    async fn capture(&self, url: &str, output_dir: &Path) -> SitelensResult<()> {
        let client = Arc::new(
            BrowserClient::connect(&self.browser_endpoint)
                .await
                .map_err(|e| SitelensError::capture_failed(url, &e.to_string()))?,
        );

        let desktop = Self::capture_viewport(
            &client,
            url,
            output_dir.join(DESKTOP_SCREENSHOT_FILE),
            DESKTOP_VIEWPORT,
            false,
        );
        let mobile = Self::capture_viewport(
            &client,
            url,
            output_dir.join(MOBILE_SCREENSHOT_FILE),
            MOBILE_VIEWPORT,
            true,
        );

        // Both branches run to completion so each one closes its own page
        // target before the stage reports its result.
        let (desktop_result, mobile_result) = tokio::join!(desktop, mobile);
        desktop_result
            .and(mobile_result)
            .map_err(|e| SitelensError::capture_failed(url, &e.to_string()))?;

        Ok(())
    }
}

use std::path::Path;

use async_trait::async_trait;

use crate::errors::SitelensResult;

#[async_trait]
pub trait PageCapturer: Send + Sync {
    /// Renders the page at both viewports and writes the screenshot
    /// artifacts into `output_dir`. Failure is fatal to the run.
    async fn capture(&self, url: &str, output_dir: &Path) -> SitelensResult<()>;
}

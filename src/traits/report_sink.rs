use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::SitelensResult;
use crate::structs::audit_report::AuditReport;

#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Performs the single durable write of the report, returning the
    /// written path.
    async fn write(&self, report: &AuditReport, output_dir: &Path) -> SitelensResult<PathBuf>;
}

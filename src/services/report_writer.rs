use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::constants::REPORT_FILE;
use crate::errors::{SitelensError, SitelensResult};
use crate::structs::audit_report::AuditReport;
use crate::traits::report_sink::ReportSink;

/// Writes `report.json` into the run directory. All-or-nothing: a failed
/// write leaves no report behind.
pub struct ReportWriter;

#[async_trait]
impl ReportSink for ReportWriter {
    async fn write(&self, report: &AuditReport, output_dir: &Path) -> SitelensResult<PathBuf> {
        let path = output_dir.join(REPORT_FILE);

        let serialized = serde_json::to_string_pretty(report)
            .map_err(|e| SitelensError::persistence_failed(&path.display().to_string(), &e.to_string()))?;

        tokio::fs::write(&path, serialized)
            .await
            .map_err(|e| SitelensError::persistence_failed(&path.display().to_string(), &e.to_string()))?;

        Ok(path)
    }
}

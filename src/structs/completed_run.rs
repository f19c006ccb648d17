use std::path::PathBuf;

use crate::structs::audit_report::AuditReport;

#[derive(Debug)]
pub struct CompletedRun {
    pub run_dir: PathBuf,
    pub report_path: PathBuf,
    pub report: AuditReport,
}

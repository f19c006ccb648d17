use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use sitelens_cli::errors::{SitelensError, SitelensResult};
use sitelens_cli::structs::accessibility_finding::AccessibilityFinding;
use sitelens_cli::structs::audit_report::AuditReport;
use sitelens_cli::structs::audit_result::AuditResult;
use sitelens_cli::traits::page_capturer::PageCapturer;
use sitelens_cli::traits::page_inspector::PageInspector;
use sitelens_cli::traits::report_sink::ReportSink;
use sitelens_cli::traits::result_evaluator::ResultEvaluator;

pub fn valid_result_value(overall: f64) -> Value {
    json!({
        "overall": overall,
        "breakdown": {
            "accessibility": 78,
            "contentClarity": 85,
            "navigation": 80,
            "visualDesign": 88,
            "mobileFriendliness": 74
        },
        "improvements": [{
            "title": "Increase tap target size",
            "why": "Small targets cause mis-taps on mobile",
            "how": "Raise interactive elements to at least 44x44 CSS pixels",
            "priority": "high"
        }],
        "summary": {
            "executive": "The site is usable but cramped on mobile. Forms need accessible labels.",
            "developerTodo": ["Add alt text to hero images"]
        }
    })
}

pub fn sample_audit_result(overall: f64) -> AuditResult {
    serde_json::from_value(valid_result_value(overall)).expect("fixture deserializes")
}

pub struct FakeCapturer {
    pub fail: bool,
}

#[async_trait]
impl PageCapturer for FakeCapturer {
    async fn capture(&self, url: &str, output_dir: &Path) -> SitelensResult<()> {
        if self.fail {
            return Err(SitelensError::capture_failed(url, "renderer unavailable"));
        }
        std::fs::write(output_dir.join("desktop.png"), b"png").expect("write desktop fixture");
        std::fs::write(output_dir.join("mobile.png"), b"png").expect("write mobile fixture");
        Ok(())
    }
}

pub struct FakeInspector {
    pub findings: Vec<AccessibilityFinding>,
}

#[async_trait]
impl PageInspector for FakeInspector {
    async fn inspect(&self, _url: &str) -> Vec<AccessibilityFinding> {
        self.findings.clone()
    }
}

/// Evaluator double that records every invocation so tests can assert a
/// stage was (not) reached.
pub struct RecordingEvaluator {
    pub response: SitelensResult<AuditResult>,
    pub calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl RecordingEvaluator {
    pub fn new(response: SitelensResult<AuditResult>) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ResultEvaluator for RecordingEvaluator {
    async fn evaluate(
        &self,
        url: &str,
        findings: &[AccessibilityFinding],
    ) -> SitelensResult<AuditResult> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((url.to_string(), findings.len()));
        self.response.clone()
    }
}

pub struct FailingSink;

#[async_trait]
impl ReportSink for FailingSink {
    async fn write(&self, _report: &AuditReport, output_dir: &Path) -> SitelensResult<PathBuf> {
        Err(SitelensError::persistence_failed(
            &output_dir.display().to_string(),
            "disk full",
        ))
    }
}

/// Returns every `report.json` found below the output root.
pub fn report_files(output_root: &Path) -> Vec<PathBuf> {
    let mut reports = Vec::new();
    if let Ok(entries) = std::fs::read_dir(output_root) {
        for entry in entries.flatten() {
            let candidate = entry.path().join("report.json");
            if candidate.exists() {
                reports.push(candidate);
            }
        }
    }
    reports
}

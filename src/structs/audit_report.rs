use serde::{Deserialize, Serialize};

use crate::structs::accessibility_finding::AccessibilityFinding;
use crate::structs::audit_result::AuditResult;

/// The persisted artifact of a successful run. Written exactly once as
/// `report.json`, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub url: String,
    pub timestamp: String,
    pub audit_result: AuditResult,
    pub a11y_violations: Vec<AccessibilityFinding>,
}

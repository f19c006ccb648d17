use async_trait::async_trait;

use crate::errors::SitelensResult;
use crate::structs::accessibility_finding::AccessibilityFinding;
use crate::structs::audit_result::AuditResult;

#[async_trait]
pub trait ResultEvaluator: Send + Sync {
    /// Produces a validated audit result for the URL and findings. One
    /// attempt per run; retries are the caller's responsibility.
    async fn evaluate(
        &self,
        url: &str,
        findings: &[AccessibilityFinding],
    ) -> SitelensResult<AuditResult>;
}

use serde::{Deserialize, Serialize};

use crate::structs::audit_summary::AuditSummary;
use crate::structs::improvement::Improvement;
use crate::structs::score_breakdown::ScoreBreakdown;

/// The model-evaluated outcome of a run. Only ever constructed through
/// `result_schema::validate`, so holding a value means the invariants held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    pub overall: f64,
    pub breakdown: ScoreBreakdown,
    pub improvements: Vec<Improvement>,
    pub summary: AuditSummary,
}

use serde::{Deserialize, Serialize};

/// The five mandatory sub-scores, each in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub accessibility: f64,
    pub content_clarity: f64,
    pub navigation: f64,
    pub visual_design: f64,
    pub mobile_friendliness: f64,
}

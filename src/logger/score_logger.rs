use crate::structs::audit_result::AuditResult;

pub struct ScoreLogger;

impl ScoreLogger {
    pub fn print_summary(result: &AuditResult) {
        log::info!("{}", "=".repeat(50));
        log::info!("📊 UX Audit Scores");
        log::info!("{}", "=".repeat(50));
        log::info!("   Overall:             {:>5.1}", result.overall);
        log::info!("   Accessibility:       {:>5.1}", result.breakdown.accessibility);
        log::info!("   Content clarity:     {:>5.1}", result.breakdown.content_clarity);
        log::info!("   Navigation:          {:>5.1}", result.breakdown.navigation);
        log::info!("   Visual design:       {:>5.1}", result.breakdown.visual_design);
        log::info!("   Mobile friendliness: {:>5.1}", result.breakdown.mobile_friendliness);

        if !result.improvements.is_empty() {
            log::info!("🛠 Recommended improvements:");
            for improvement in &result.improvements {
                log::info!("   [{}] {}", improvement.priority.as_str(), improvement.title);
            }
        }

        log::info!("📝 {}", result.summary.executive);
    }
}

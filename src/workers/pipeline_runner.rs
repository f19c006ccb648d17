use std::path::PathBuf;

use crate::config::constants::RUN_DIR_TIMESTAMP_FORMAT;
use crate::enums::pipeline_state::PipelineState;
use crate::enums::run_outcome::RunOutcome;
use crate::errors::{SitelensError, SitelensResult};
use crate::structs::audit_report::AuditReport;
use crate::structs::audit_request::AuditRequest;
use crate::structs::completed_run::CompletedRun;
use crate::traits::page_capturer::PageCapturer;
use crate::traits::page_inspector::PageInspector;
use crate::traits::report_sink::ReportSink;
use crate::traits::result_evaluator::ResultEvaluator;

/// Sequences one audit run through
/// Init → Capturing → Inspecting → Evaluating → Persisting → Done.
/// Strictly linear, no retries; the first failure ends the run and the
/// outcome names the state it happened in.
pub struct PipelineRunner {
    capturer: Box<dyn PageCapturer>,
    inspector: Box<dyn PageInspector>,
    evaluator: Box<dyn ResultEvaluator>,
    sink: Box<dyn ReportSink>,
    output_root: PathBuf,
}

impl PipelineRunner {
    pub fn new(
        capturer: Box<dyn PageCapturer>,
        inspector: Box<dyn PageInspector>,
        evaluator: Box<dyn ResultEvaluator>,
        sink: Box<dyn ReportSink>,
        output_root: PathBuf,
    ) -> Self {
        Self {
            capturer,
            inspector,
            evaluator,
            sink,
            output_root,
        }
    }

    pub async fn run(&self, raw_url: &str) -> RunOutcome {
        // Init: validate input and allocate the run directory before any
        // external call is made.
        let request = match AuditRequest::new(raw_url) {
            Ok(request) => request,
            Err(error) => {
                return RunOutcome::Failed {
                    state: PipelineState::Init,
                    error,
                }
            }
        };

        let run_dir = match self.allocate_run_dir(&request) {
            Ok(run_dir) => run_dir,
            Err(error) => {
                return RunOutcome::Failed {
                    state: PipelineState::Init,
                    error,
                }
            }
        };

        log::info!("🚀 Starting UX audit for {}", request.url);
        log::info!("📁 Run directory: {}", run_dir.display());

        // Capturing: screenshots are a required deliverable, so any failure
        // here abandons the run.
        log::info!("📸 Capturing desktop and mobile screenshots...");
        if let Err(error) = self.capturer.capture(request.url.as_str(), &run_dir).await {
            return RunOutcome::Failed {
                state: PipelineState::Capturing,
                error,
            };
        }

        // Inspecting: advisory, cannot fail the run.
        log::info!("🔎 Running accessibility inspection...");
        let findings = self.inspector.inspect(request.url.as_str()).await;
        log::info!("   {} finding classes detected", findings.len());

        // Evaluating: one schema-constrained attempt.
        log::info!("🤖 Requesting structured evaluation...");
        let audit_result = match self.evaluator.evaluate(request.url.as_str(), &findings).await {
            Ok(audit_result) => audit_result,
            Err(error) => {
                return RunOutcome::Failed {
                    state: PipelineState::Evaluating,
                    error,
                }
            }
        };

        // Persisting: assemble the report and write it exactly once.
        log::info!("💾 Persisting audit report...");
        let report = AuditReport {
            url: request.url.to_string(),
            timestamp: request.created_at.to_rfc3339(),
            audit_result,
            a11y_violations: findings,
        };

        let report_path = match self.sink.write(&report, &run_dir).await {
            Ok(report_path) => report_path,
            Err(error) => {
                return RunOutcome::Failed {
                    state: PipelineState::Persisting,
                    error,
                }
            }
        };

        log::info!("✅ Audit complete: {}", report_path.display());
        RunOutcome::Completed(CompletedRun {
            run_dir,
            report_path,
            report,
        })
    }

    fn allocate_run_dir(&self, request: &AuditRequest) -> SitelensResult<PathBuf> {
        let dir_name = request
            .created_at
            .format(RUN_DIR_TIMESTAMP_FORMAT)
            .to_string();
        let run_dir = self.output_root.join(dir_name);

        std::fs::create_dir_all(&run_dir).map_err(|e| {
            SitelensError::persistence_failed(&run_dir.display().to_string(), &e.to_string())
        })?;

        Ok(run_dir)
    }
}

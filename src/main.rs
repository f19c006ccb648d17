use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sitelens_cli::config::config_manager::ConfigManager;
use sitelens_cli::enums::run_outcome::RunOutcome;
use sitelens_cli::logger::score_logger::ScoreLogger;
use sitelens_cli::services::capture_service::CaptureService;
use sitelens_cli::services::evaluation_client::EvaluationClient;
use sitelens_cli::services::inspection_service::InspectionService;
use sitelens_cli::services::report_writer::ReportWriter;
use sitelens_cli::structs::cli::Cli;
use sitelens_cli::workers::pipeline_runner::PipelineRunner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Configuration is validated once, before any pipeline work begins.
    let settings = match ConfigManager::load_eval_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("❌ {}", e.user_message());
            return ExitCode::from(1);
        }
    };

    let runner = PipelineRunner::new(
        Box::new(CaptureService::new(cli.browser_endpoint.clone())),
        Box::new(InspectionService::new(cli.browser_endpoint.clone())),
        Box::new(EvaluationClient::new(settings)),
        Box::new(ReportWriter),
        PathBuf::from(cli.output_dir),
    );

    match runner.run(&cli.url).await {
        RunOutcome::Completed(run) => {
            ScoreLogger::print_summary(&run.report.audit_result);
            log::info!("📁 Artifacts: {}", run.run_dir.display());
            ExitCode::SUCCESS
        }
        RunOutcome::Failed { state, error } => {
            log::error!("❌ Audit failed during {}: {}", state.name(), error.user_message());
            ExitCode::from(1)
        }
    }
}

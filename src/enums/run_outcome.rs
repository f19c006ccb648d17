use crate::enums::pipeline_state::PipelineState;
use crate::errors::SitelensError;
use crate::structs::completed_run::CompletedRun;

/// Terminal outcome of one pipeline run. Carries the state the run ended in
/// so callers and tests can distinguish where a failure happened without
/// inspecting error internals.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(CompletedRun),
    Failed {
        state: PipelineState,
        error: SitelensError,
    },
}

//! Progress notification port
//!
//! Defines the interface for reporting progress during a content run.

use studio_domain::{AgentRole, GenerationStatus, Model};

/// Callback for progress updates during a content run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first stage
    fn on_run_start(&self, total_stages: usize);

    /// Called when a stage starts
    fn on_stage_start(&self, role: AgentRole, model: &Model);

    /// Called when a stage completes
    fn on_stage_complete(&self, role: AgentRole, success: bool);

    /// Called after a search finished for a stage
    fn on_research(&self, _role: AgentRole, _hits: usize) {}

    /// Called when the run falls back to simulation mode
    fn on_fallback(&self, _reason: &str) {}

    /// Called once the run produced a result
    fn on_run_complete(&self, _status: GenerationStatus) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_run_start(&self, _total_stages: usize) {}
    fn on_stage_start(&self, _role: AgentRole, _model: &Model) {}
    fn on_stage_complete(&self, _role: AgentRole, _success: bool) {}
}

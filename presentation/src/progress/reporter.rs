//! Progress reporting for content runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use studio_application::ProgressNotifier;
use studio_domain::{AgentRole, GenerationStatus, Model};

/// Reports progress with one bar across all workflow stages
pub struct ProgressReporter {
    multi: MultiProgress,
    run_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            run_bar: Mutex::new(None),
        }
    }

    fn run_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.run_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn stage_activity(role: AgentRole) -> &'static str {
        match role {
            AgentRole::Writer => "Creating content...",
            AgentRole::Editor => "Reviewing and improving...",
            AgentRole::SeoSpecialist => "Optimizing for search...",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_stages: usize) {
        let pb = self.multi.add(ProgressBar::new(total_stages as u64));
        pb.set_style(Self::run_style());
        pb.set_prefix("Content Team");
        pb.set_message("Initializing AI agents...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut guard) = self.run_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_stage_start(&self, role: AgentRole, model: &Model) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} ({}) {}", role.title(), model, Self::stage_activity(role)));
        });
    }

    fn on_stage_complete(&self, role: AgentRole, success: bool) {
        self.with_bar(|pb| {
            let status = if success {
                format!("{} {}", "v".green(), role.title())
            } else {
                format!("{} {}", "x".red(), role.title())
            };
            pb.set_message(status);
            if success {
                pb.inc(1);
            }
        });
    }

    fn on_research(&self, role: AgentRole, hits: usize) {
        self.with_bar(|pb| pb.set_message(format!("{} read {} sources", role.title(), hits)));
    }

    fn on_fallback(&self, reason: &str) {
        self.with_bar(|pb| pb.println(format!("{} {}", "Falling back to simulation:".yellow(), reason)));
    }

    fn on_run_complete(&self, status: GenerationStatus) {
        let Ok(mut guard) = self.run_bar.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            let message = match status {
                GenerationStatus::Success => "Content generation complete!".green().to_string(),
                GenerationStatus::Simulation => "Finished in simulation mode".yellow().to_string(),
            };
            pb.finish_with_message(message);
        }
    }
}

/// Simple text-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_run_start(&self, total_stages: usize) {
        eprintln!(
            "{} {} ({} agents)",
            "->".cyan(),
            "Content Team".bold(),
            total_stages
        );
    }

    fn on_stage_start(&self, role: AgentRole, model: &Model) {
        eprintln!("  {} {} ({})", "..".dimmed(), role.title(), model);
    }

    fn on_stage_complete(&self, role: AgentRole, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), role.title());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), role.title());
        }
    }

    fn on_fallback(&self, reason: &str) {
        eprintln!("  {} simulation mode: {}", "!".yellow(), reason);
    }

    fn on_run_complete(&self, _status: GenerationStatus) {
        eprintln!();
    }
}

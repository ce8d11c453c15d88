//! Presentation layer for content-studio
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the web studio.

pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, GenerateArgs, OutputFormat, ServeArgs};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::html_text::display_text;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use web::{AppState, router, serve};

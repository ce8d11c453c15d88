//! Output formatting for content results

pub mod console;
pub mod formatter;
pub mod html_text;

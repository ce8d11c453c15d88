//! Content requests, results, and the offline simulation.

pub mod options;
pub mod request;
pub mod result;
pub mod simulation;
pub mod stats;
pub mod word_count;

//! The content team: agent roles, their tasks, and the sequential workflow.

pub mod agent;
pub mod task;
pub mod workflow;

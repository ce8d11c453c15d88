//! Prompt construction for the agents.

pub mod template;

pub use template::PromptTemplate;

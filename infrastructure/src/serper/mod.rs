//! Serper adapter
//!
//! Implements SearchGateway over the Serper Google-search API.

mod search;

pub use search::{DEFAULT_SERPER_URL, SerperSearch, parse_research};

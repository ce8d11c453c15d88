//! Progress reporting for content runs

pub mod reporter;

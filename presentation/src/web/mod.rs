//! Web studio: form UI, JSON API and downloads

pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::{GenerateForm, router};
pub use server::serve;
pub use state::{AppState, ResultStore, StoredResult};

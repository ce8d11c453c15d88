//! Shared state of the web studio

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::Mutex;
use studio_application::{ApiStatus, CreateContentUseCase, GenerationSettings, LlmGateway};
use studio_domain::{ContentResult, GenerationStats, GenerationStatus};

/// A generated result kept for download
#[derive(Debug, Clone)]
pub struct StoredResult {
    pub id: u64,
    pub result: ContentResult,
    pub created_at: DateTime<Local>,
}

impl StoredResult {
    /// `content_YYYYmmdd_HHMMSS.txt`, or `simulated_content_…` for simulations
    pub fn file_name(&self) -> String {
        let prefix = match self.result.status {
            GenerationStatus::Success => "content",
            GenerationStatus::Simulation => "simulated_content",
        };
        format!("{}_{}.txt", prefix, self.created_at.format("%Y%m%d_%H%M%S"))
    }
}

/// Bounded in-memory result store; the oldest entry is evicted first
#[derive(Debug)]
pub struct ResultStore {
    capacity: usize,
    next_id: u64,
    entries: VecDeque<StoredResult>,
}

impl ResultStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            next_id: 1,
            entries: VecDeque::new(),
        }
    }

    pub fn insert(&mut self, result: ContentResult) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(StoredResult {
            id,
            result,
            created_at: Local::now(),
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&StoredResult> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// State handed to every handler
pub struct AppState<G: LlmGateway + 'static> {
    pub use_case: CreateContentUseCase<G>,
    pub settings: GenerationSettings,
    pub api_status: ApiStatus,
    store: Mutex<ResultStore>,
    stats: Mutex<GenerationStats>,
}

impl<G: LlmGateway + 'static> AppState<G> {
    pub fn new(
        use_case: CreateContentUseCase<G>,
        settings: GenerationSettings,
        api_status: ApiStatus,
        max_stored_results: usize,
    ) -> Self {
        Self {
            use_case,
            settings,
            api_status,
            store: Mutex::new(ResultStore::new(max_stored_results)),
            stats: Mutex::new(GenerationStats::default()),
        }
    }

    /// Count the run and keep the result for download
    pub fn record(&self, result: ContentResult) -> u64 {
        if let Ok(mut stats) = self.stats.lock() {
            stats.record(result.status);
        }
        self.store
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .insert(result)
    }

    pub fn record_failure(&self) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.record_failure();
        }
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats.lock().map(|s| *s).unwrap_or_default()
    }

    pub fn stored(&self, id: u64) -> Option<StoredResult> {
        self.store.lock().ok()?.get(id).cloned()
    }
}

use crate::core::PairResult;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Keyed store of finished compile results.
///
/// Guards itself with a mutex so one engine can serve callers from several
/// tasks without external locking. No eviction and no TTL: an entry lives
/// until it is cleared or the process exits.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: Mutex<HashMap<String, Vec<PairResult>>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<Vec<PairResult>> {
        let entries = self.entries.lock().await;
        entries.get(key).cloned()
    }

    /// Stores a finished result, replacing any previous entry wholesale.
    pub async fn put(&self, key: &str, results: Vec<PairResult>) {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), results);
    }

    pub async fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.lock().await;
        entries.clear();
    }
}

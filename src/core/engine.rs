use crate::core::cache::ResultCache;
use crate::core::{PairResult, Pipeline, Result};

/// Drives the pipeline stages end to end and owns the result cache.
///
/// One compile call does one file read and one in-memory pass; the cache
/// guards itself, so a shared engine needs no external locking.
pub struct CompileEngine<P: Pipeline> {
    pipeline: P,
    cache: ResultCache,
}

impl<P: Pipeline> CompileEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            cache: ResultCache::new(),
        }
    }

    /// Compiles one CSV source into its merged pair list, sorted by shared
    /// duration, longest first.
    ///
    /// `source_key` must be a file path when `is_file_path` is set; raw CSV
    /// content is rejected by the reader. File-path results are cached under
    /// the key and served without re-reading the file until invalidated; the
    /// cache is only written once the whole pipeline has succeeded. Running
    /// out of data at any stage is a normal empty result, not an error.
    pub async fn compile(&self, source_key: &str, is_file_path: bool) -> Result<Vec<PairResult>> {
        if is_file_path {
            if let Some(cached) = self.cache.get(source_key).await {
                tracing::debug!(source_key, "serving cached result");
                return Ok(cached);
            }
        }

        let lines = self.pipeline.extract(source_key, is_file_path).await?;
        tracing::info!(source_key, lines = lines.len(), "extracted source lines");

        let assignments = self.pipeline.parse(lines).await?;
        tracing::info!(records = assignments.len(), "parsed work assignments");

        let Some(mut results) = self.pipeline.pair(assignments).await? else {
            tracing::info!(source_key, "no pairable data in source");
            return Ok(Vec::new());
        };

        // Stable sort: equal durations keep their flatten order.
        results.sort_by(|a, b| b.shared.cmp(&a.shared));
        tracing::info!(pairs = results.len(), "compiled pair results");

        if is_file_path {
            self.cache.put(source_key, results.clone()).await;
        }

        Ok(results)
    }

    /// Drops every cached result.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Drops the cached result for one source, forcing the next compile of
    /// that key to re-read and recompute.
    pub async fn clear_cache_entry(&self, key: &str) {
        self.cache.remove(key).await;
    }
}

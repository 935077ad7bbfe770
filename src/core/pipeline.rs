use crate::core::{
    grouping, header, merge, pairing, parser, reader, ConfigProvider, PairResult, Pipeline,
    Result, Storage, WorkAssignment,
};

/// The concrete CSV pipeline: source lines in, flattened pair results out.
pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    async fn extract(&self, source_key: &str, is_file_path: bool) -> Result<Vec<String>> {
        reader::read_lines(&self.storage, &self.config, source_key, is_file_path).await
    }

    async fn parse(&self, lines: Vec<String>) -> Result<Vec<WorkAssignment>> {
        let resolution = header::resolve_columns(&lines, self.config.header_tokens());
        if !resolution.is_resolved() {
            tracing::debug!("no header row found, assuming default column order");
        }

        let columns = resolution.columns();
        let open_end = parser::open_end_date();

        let mut assignments = Vec::new();
        for line in &lines {
            match parser::parse_line(line, columns, self.config.date_format(), open_end) {
                Some(assignment) => assignments.push(assignment),
                None => tracing::debug!(line = %line, "skipping unparseable line"),
            }
        }

        Ok(assignments)
    }

    async fn pair(&self, assignments: Vec<WorkAssignment>) -> Result<Option<Vec<PairResult>>> {
        if assignments.is_empty() {
            return Ok(None);
        }

        let buckets = grouping::group_by_project(assignments);
        if buckets.is_empty() {
            return Ok(None);
        }

        let mut pair_buckets = pairing::generate_pairs(&buckets);
        if pair_buckets.is_empty() {
            return Ok(None);
        }

        merge::merge_pairs(&mut pair_buckets);

        // Flatten in bucket order; the engine's duration sort is stable, so
        // this order decides ties.
        Ok(Some(
            pair_buckets
                .into_iter()
                .flat_map(|bucket| bucket.pairs)
                .collect(),
        ))
    }
}

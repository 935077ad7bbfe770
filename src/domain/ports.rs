use crate::config::HeaderTokens;
use crate::domain::model::{PairResult, WorkAssignment};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn file_exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn date_format(&self) -> &str;
    fn accepted_extensions(&self) -> &[String];
    fn header_tokens(&self) -> &HeaderTokens;
}

/// The three pipeline stages, in call order. `parse` never fails a line: it
/// drops what it cannot read. `pair` answers `None` when some stage ran out
/// of data, which callers surface as an empty result rather than an error.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, source_key: &str, is_file_path: bool) -> Result<Vec<String>>;
    async fn parse(&self, lines: Vec<String>) -> Result<Vec<WorkAssignment>>;
    async fn pair(&self, assignments: Vec<WorkAssignment>) -> Result<Option<Vec<PairResult>>>;
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{CsvConfig, HeaderTokens};
pub use crate::core::{engine::CompileEngine, pipeline::CsvPipeline};
pub use crate::domain::model::PairResult;
pub use crate::utils::error::{OverlapError, Result};

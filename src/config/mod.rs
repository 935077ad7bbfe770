#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_date_format, validate_extension_list, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Column header tokens recognized during header resolution, compared
/// case-insensitively against the trimmed header fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderTokens {
    #[serde(default = "default_employee_id_token")]
    pub employee_id: String,
    #[serde(default = "default_project_id_token")]
    pub project_id: String,
    #[serde(default = "default_date_from_token")]
    pub date_from: String,
    #[serde(default = "default_date_to_token")]
    pub date_to: String,
}

impl Default for HeaderTokens {
    fn default() -> Self {
        Self {
            employee_id: default_employee_id_token(),
            project_id: default_project_id_token(),
            date_from: default_date_from_token(),
            date_to: default_date_to_token(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    /// strftime format every date field is parsed with. Pinned to ISO-8601
    /// by default so results do not depend on the host locale.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Extensions (without the dot) a source file may carry.
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,

    #[serde(default)]
    pub headers: HeaderTokens,
}

impl CsvConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: CsvConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            accepted_extensions: default_accepted_extensions(),
            headers: HeaderTokens::default(),
        }
    }
}

impl ConfigProvider for CsvConfig {
    fn date_format(&self) -> &str {
        &self.date_format
    }

    fn accepted_extensions(&self) -> &[String] {
        &self.accepted_extensions
    }

    fn header_tokens(&self) -> &HeaderTokens {
        &self.headers
    }
}

impl Validate for CsvConfig {
    fn validate(&self) -> Result<()> {
        validate_date_format("date_format", &self.date_format)?;
        validate_extension_list("accepted_extensions", &self.accepted_extensions)?;
        validate_non_empty_string("headers.employee_id", &self.headers.employee_id)?;
        validate_non_empty_string("headers.project_id", &self.headers.project_id)?;
        validate_non_empty_string("headers.date_from", &self.headers.date_from)?;
        validate_non_empty_string("headers.date_to", &self.headers.date_to)?;
        Ok(())
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_accepted_extensions() -> Vec<String> {
    vec!["csv".to_string()]
}

fn default_employee_id_token() -> String {
    "empid".to_string()
}

fn default_project_id_token() -> String {
    "projectid".to_string()
}

fn default_date_from_token() -> String {
    "datefrom".to_string()
}

fn default_date_to_token() -> String {
    "dateto".to_string()
}

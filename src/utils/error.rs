use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Source file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Unsupported source format for {path}: expected one of [{expected}]")]
    UnsupportedFormat { path: String, expected: String },

    #[error("Raw CSV content is not a supported source; provide a file path instead")]
    RawSourceUnsupported,

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, OverlapError>;

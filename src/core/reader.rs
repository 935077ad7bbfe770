use crate::core::{ConfigProvider, Result, Storage};
use crate::utils::error::OverlapError;
use std::path::Path;

/// Reads a delimited-text source into its non-blank lines, in file order.
///
/// Only file paths are supported. Raw CSV content handed in directly has no
/// reader yet and is rejected outright rather than guessed at.
pub async fn read_lines<S, C>(
    storage: &S,
    config: &C,
    source_key: &str,
    is_file_path: bool,
) -> Result<Vec<String>>
where
    S: Storage,
    C: ConfigProvider,
{
    if !is_file_path {
        return Err(OverlapError::RawSourceUnsupported);
    }

    if !storage.file_exists(source_key).await {
        return Err(OverlapError::SourceNotFound {
            path: source_key.to_string(),
        });
    }

    if !has_accepted_extension(source_key, config.accepted_extensions()) {
        return Err(OverlapError::UnsupportedFormat {
            path: source_key.to_string(),
            expected: config.accepted_extensions().join(", "),
        });
    }

    let bytes = storage.read_file(source_key).await?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn has_accepted_extension(path: &str, accepted: &[String]) -> bool {
    Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| accepted.iter().any(|a| a.eq_ignore_ascii_case(extension)))
        .unwrap_or(false)
}

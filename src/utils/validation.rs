use crate::utils::error::{OverlapError, Result};
use chrono::NaiveDate;
use std::fmt::Write as _;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OverlapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A date format is accepted when it can render a probe date and parse the
/// rendered text back into the same calendar day. Formats that drop a field
/// (`%Y` alone, `%m/%d`) fail the reparse and are rejected up front instead
/// of silently skipping every data row later.
pub fn validate_date_format(field_name: &str, format: &str) -> Result<()> {
    validate_non_empty_string(field_name, format)?;

    let probe = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();
    let mut rendered = String::new();
    if write!(rendered, "{}", probe.format(format)).is_err() {
        return Err(OverlapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Not a valid strftime date format".to_string(),
        });
    }

    match NaiveDate::parse_from_str(&rendered, format) {
        Ok(reparsed) if reparsed == probe => Ok(()),
        _ => Err(OverlapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Format does not round-trip a full calendar date".to_string(),
        }),
    }
}

pub fn validate_extension_list(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(OverlapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one accepted extension is required".to_string(),
        });
    }

    for extension in extensions {
        if extension.trim().is_empty() || extension.contains('.') {
            return Err(OverlapError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: extension.clone(),
                reason: "Extensions are bare suffixes like \"csv\", without a dot".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("date_format", "%Y-%m-%d").is_ok());
        assert!(validate_non_empty_string("date_format", "").is_err());
        assert!(validate_non_empty_string("date_format", "   ").is_err());
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format("date_format", "%Y-%m-%d").is_ok());
        assert!(validate_date_format("date_format", "%d/%m/%Y").is_ok());
        assert!(validate_date_format("date_format", "").is_err());
        // Incomplete formats cannot be parsed back into a date.
        assert!(validate_date_format("date_format", "%Y").is_err());
    }

    #[test]
    fn test_validate_extension_list() {
        let extensions = vec!["csv".to_string()];
        assert!(validate_extension_list("accepted_extensions", &extensions).is_ok());

        assert!(validate_extension_list("accepted_extensions", &[]).is_err());

        let dotted = vec![".csv".to_string()];
        assert!(validate_extension_list("accepted_extensions", &dotted).is_err());
    }
}

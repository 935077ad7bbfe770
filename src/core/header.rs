use crate::config::HeaderTokens;

/// Zero-based column positions of the four assignment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub employee_id: usize,
    pub project_id: usize,
    pub date_from: usize,
    pub date_to: usize,
}

/// The fixed fallback order: employee id, project id, date-from, date-to.
pub const DEFAULT_COLUMNS: ColumnMap = ColumnMap {
    employee_id: 0,
    project_id: 1,
    date_from: 2,
    date_to: 3,
};

/// Outcome of scanning the input for a header row.
///
/// `Defaulted` is informational only; parsing proceeds with the fixed
/// column order either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderResolution {
    Resolved(ColumnMap),
    Defaulted,
}

impl HeaderResolution {
    pub fn columns(&self) -> ColumnMap {
        match self {
            HeaderResolution::Resolved(columns) => *columns,
            HeaderResolution::Defaulted => DEFAULT_COLUMNS,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, HeaderResolution::Resolved(_))
    }
}

/// Finds the first line mentioning all four header tokens and maps each
/// token to its comma-separated field position.
///
/// The header line is not removed from the stream; it never parses as a
/// record, so the parser rejects it naturally.
pub fn resolve_columns(lines: &[String], tokens: &HeaderTokens) -> HeaderResolution {
    let header = lines.iter().find(|line| {
        let lower = line.to_lowercase();
        [
            &tokens.employee_id,
            &tokens.project_id,
            &tokens.date_from,
            &tokens.date_to,
        ]
        .iter()
        .all(|token| lower.contains(&token.to_lowercase()))
    });

    let Some(header) = header else {
        return HeaderResolution::Defaulted;
    };

    let fields: Vec<&str> = header.split(',').map(str::trim).collect();
    let position =
        |token: &str| fields.iter().position(|field| field.eq_ignore_ascii_case(token));

    match (
        position(&tokens.employee_id),
        position(&tokens.project_id),
        position(&tokens.date_from),
        position(&tokens.date_to),
    ) {
        (Some(employee_id), Some(project_id), Some(date_from), Some(date_to)) => {
            HeaderResolution::Resolved(ColumnMap {
                employee_id,
                project_id,
                date_from,
                date_to,
            })
        }
        _ => HeaderResolution::Defaulted,
    }
}

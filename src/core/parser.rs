use crate::core::header::ColumnMap;
use crate::core::WorkAssignment;
use chrono::{Duration, Local, NaiveDate};

/// Parses one CSV line into a work assignment.
///
/// Returns `None` for lines that cannot yield a record: any of the four
/// column indices out of range, a blank employee id, project id or
/// date-from, or a date-from that does not parse. A blank or unparseable
/// date-to becomes `open_end` instead, keeping the assignment active.
pub fn parse_line(
    line: &str,
    columns: ColumnMap,
    date_format: &str,
    open_end: NaiveDate,
) -> Option<WorkAssignment> {
    let segments: Vec<&str> = line.split(',').map(str::trim).collect();

    let employee_id = *segments.get(columns.employee_id)?;
    let project_id = *segments.get(columns.project_id)?;
    let date_from = *segments.get(columns.date_from)?;
    let date_to = *segments.get(columns.date_to)?;

    if employee_id.is_empty() || project_id.is_empty() || date_from.is_empty() {
        return None;
    }

    let date_from = NaiveDate::parse_from_str(date_from, date_format).ok()?;
    let date_to = NaiveDate::parse_from_str(date_to, date_format).unwrap_or(open_end);

    Some(WorkAssignment {
        employee_id: employee_id.to_string(),
        project_id: project_id.to_string(),
        date_from,
        date_to,
    })
}

/// Tomorrow in local time, the substitute end date for open assignments.
/// The extra day makes an employee's last recorded day overlap the first
/// day of a same-day successor on the project.
pub fn open_end_date() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::header::DEFAULT_COLUMNS;

    const FORMAT: &str = "%Y-%m-%d";

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, FORMAT).unwrap()
    }

    fn open_end() -> NaiveDate {
        date("2030-01-01")
    }

    #[test]
    fn test_parses_complete_line() {
        let record =
            parse_line("101,7,2024-01-01,2024-02-01", DEFAULT_COLUMNS, FORMAT, open_end())
                .unwrap();

        assert_eq!(record.employee_id, "101");
        assert_eq!(record.project_id, "7");
        assert_eq!(record.date_from, date("2024-01-01"));
        assert_eq!(record.date_to, date("2024-02-01"));
    }

    #[test]
    fn test_trims_segment_whitespace() {
        let record = parse_line(
            " 101 , 7 , 2024-01-01 , 2024-02-01 ",
            DEFAULT_COLUMNS,
            FORMAT,
            open_end(),
        )
        .unwrap();

        assert_eq!(record.employee_id, "101");
        assert_eq!(record.project_id, "7");
    }

    #[test]
    fn test_blank_date_to_gets_open_end() {
        let record =
            parse_line("101,7,2024-01-01,", DEFAULT_COLUMNS, FORMAT, open_end()).unwrap();
        assert_eq!(record.date_to, open_end());
    }

    #[test]
    fn test_unparseable_date_to_gets_open_end() {
        let record =
            parse_line("101,7,2024-01-01,NULL", DEFAULT_COLUMNS, FORMAT, open_end()).unwrap();
        assert_eq!(record.date_to, open_end());
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        assert!(parse_line(",7,2024-01-01,", DEFAULT_COLUMNS, FORMAT, open_end()).is_none());
        assert!(parse_line("101,,2024-01-01,", DEFAULT_COLUMNS, FORMAT, open_end()).is_none());
        assert!(parse_line("101,7,,2024-02-01", DEFAULT_COLUMNS, FORMAT, open_end()).is_none());
    }

    #[test]
    fn test_unparseable_date_from_rejected() {
        assert!(
            parse_line("101,7,01.01.2024,2024-02-01", DEFAULT_COLUMNS, FORMAT, open_end())
                .is_none()
        );
    }

    #[test]
    fn test_too_few_columns_rejected() {
        // Out-of-range column access means no record, never a panic.
        assert!(parse_line("101,7,2024-01-01", DEFAULT_COLUMNS, FORMAT, open_end()).is_none());
        assert!(parse_line("101", DEFAULT_COLUMNS, FORMAT, open_end()).is_none());
    }

    #[test]
    fn test_header_row_is_rejected_as_record() {
        assert!(
            parse_line("EmpID,ProjectID,DateFrom,DateTo", DEFAULT_COLUMNS, FORMAT, open_end())
                .is_none()
        );
    }

    #[test]
    fn test_permuted_columns() {
        let columns = ColumnMap {
            employee_id: 2,
            project_id: 3,
            date_from: 0,
            date_to: 1,
        };
        let record =
            parse_line("2024-01-01,2024-02-01,101,7", columns, FORMAT, open_end()).unwrap();

        assert_eq!(record.employee_id, "101");
        assert_eq!(record.project_id, "7");
        assert_eq!(record.date_from, date("2024-01-01"));
    }

    #[test]
    fn test_custom_date_format() {
        let record = parse_line(
            "101,7,01/02/2024,28/02/2024",
            DEFAULT_COLUMNS,
            "%d/%m/%Y",
            open_end(),
        )
        .unwrap();

        assert_eq!(record.date_from, date("2024-02-01"));
        assert_eq!(record.date_to, date("2024-02-28"));
    }
}

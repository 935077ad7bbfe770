use chrono::{Duration, NaiveDate};

/// One employee's recorded tenure on one project.
///
/// `date_to` is always populated: rows without a usable end date get the
/// substitute "open end" date (tomorrow) at parse time, so an assignment
/// that is still running covers today and overlaps a same-day successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkAssignment {
    pub employee_id: String,
    pub project_id: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

/// Cumulative shared time of two employees on one project.
///
/// Ids keep the order the source rows were encountered in; identity is
/// unordered, so (A, B) and (B, A) name the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairResult {
    pub first_id: String,
    pub second_id: String,
    pub project_id: String,
    pub shared: Duration,
}

impl PairResult {
    pub fn shared_days(&self) -> i64 {
        self.shared.num_days()
    }

    pub fn same_employees(&self, other: &PairResult) -> bool {
        if self.project_id != other.project_id {
            return false;
        }

        self.first_id == other.first_id && self.second_id == other.second_id
            || self.first_id == other.second_id && self.second_id == other.first_id
    }
}

use crate::core::grouping::ProjectBucket;
use crate::core::{PairResult, WorkAssignment};
use chrono::Duration;

/// Employee pairs generated for one project, in generation order.
#[derive(Debug, Clone)]
pub struct PairBucket {
    pub project_id: String,
    pub pairs: Vec<PairResult>,
}

/// Considers every unordered pair of assignments within each bucket exactly
/// once (i < j in bucket order) and emits a pair for every intersecting
/// couple, ids in encounter order. Zero-length spans are emitted here and
/// weeded out by the merge pass.
pub fn generate_pairs(buckets: &[ProjectBucket]) -> Vec<PairBucket> {
    buckets
        .iter()
        .map(|bucket| {
            let mut pairs = Vec::new();

            for (index, first) in bucket.assignments.iter().enumerate() {
                for second in &bucket.assignments[index + 1..] {
                    if let Some(shared) = intersection(first, second) {
                        pairs.push(PairResult {
                            first_id: first.employee_id.clone(),
                            second_id: second.employee_id.clone(),
                            project_id: first.project_id.clone(),
                            shared,
                        });
                    }
                }
            }

            PairBucket {
                project_id: bucket.project_id.clone(),
                pairs,
            }
        })
        .collect()
}

/// Length of the overlap between two assignment intervals, or `None` when
/// they do not intersect.
///
/// Boundaries compare inclusively on the stored dates, so with the open-end
/// substitution an assignment that is still running overlaps a successor
/// starting today by one day. Assignments on different projects never
/// intersect, even though grouping already separates them.
pub fn intersection(first: &WorkAssignment, second: &WorkAssignment) -> Option<Duration> {
    if first.project_id != second.project_id {
        return None;
    }

    if first.date_from <= second.date_from {
        if first.date_to <= second.date_to && first.date_to > second.date_from {
            return Some(first.date_to - second.date_from);
        }
        if first.date_to >= second.date_to {
            return Some(second.date_to - second.date_from);
        }
    }
    if first.date_from >= second.date_from {
        if first.date_to >= second.date_to && second.date_to > first.date_from {
            return Some(second.date_to - first.date_from);
        }
        if first.date_to <= second.date_to {
            return Some(first.date_to - first.date_from);
        }
    }

    None
}

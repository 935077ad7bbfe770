use crate::core::WorkAssignment;

/// All assignments recorded against one project, in input order.
#[derive(Debug, Clone)]
pub struct ProjectBucket {
    pub project_id: String,
    pub assignments: Vec<WorkAssignment>,
}

/// Partitions assignments by project id. Buckets keep first-seen project
/// order and records keep input order within their bucket; nothing is
/// dropped or duplicated. Bucket order is load-bearing: the final sort is
/// stable, so it decides how equal-duration pairs tie-break.
pub fn group_by_project(assignments: Vec<WorkAssignment>) -> Vec<ProjectBucket> {
    let mut buckets: Vec<ProjectBucket> = Vec::new();

    for assignment in assignments {
        match buckets
            .iter_mut()
            .find(|bucket| bucket.project_id == assignment.project_id)
        {
            Some(bucket) => bucket.assignments.push(assignment),
            None => buckets.push(ProjectBucket {
                project_id: assignment.project_id.clone(),
                assignments: vec![assignment],
            }),
        }
    }

    buckets
}

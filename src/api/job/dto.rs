use serde::Serialize;

use crate::db::models::JobRow;

/// Response wrapping a single job
#[derive(Serialize)]
pub struct JobResponse {
    pub job: JobRow,
}

/// Response wrapping a job listing
#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRow>,
}

/// Response for a deleted job
#[derive(Serialize)]
pub struct JobDeletedResponse {
    pub deleted: i32,
}

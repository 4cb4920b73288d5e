use sqlx::{Pool, Postgres};
use tracing::info;

use super::models::{JobFilters, JobNew, JobUpdate};
use crate::db::job_repository::JobRepository;
use crate::db::models::JobRow;
use crate::error::ApiError;

/// Job service containing business logic
pub struct JobService {
    pool: Pool<Postgres>,
}

impl JobService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn create(&self, job: &JobNew) -> Result<JobRow, ApiError> {
        info!(
            "Service: creating job title={} company={}",
            job.title, job.company_handle
        );
        let row = JobRepository::create(&self.pool, job).await?;
        info!("Service: job created with id={}", row.id);
        Ok(row)
    }

    pub async fn find_all(&self, filters: &JobFilters) -> Result<Vec<JobRow>, ApiError> {
        JobRepository::find_all(&self.pool, filters).await
    }

    pub async fn get(&self, id: i32) -> Result<JobRow, ApiError> {
        JobRepository::get(&self.pool, id).await
    }

    pub async fn update(&self, id: i32, data: &JobUpdate) -> Result<JobRow, ApiError> {
        info!("Service: updating job id={}", id);
        JobRepository::update(&self.pool, id, data).await
    }

    pub async fn remove(&self, id: i32) -> Result<i32, ApiError> {
        info!("Service: removing job id={}", id);
        JobRepository::remove(&self.pool, id).await
    }
}

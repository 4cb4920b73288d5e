use sqlx::{Pool, Postgres};
use tracing::info;

use super::models::{CompanyFilters, CompanyNew, CompanyUpdate};
use crate::db::company_repository::CompanyRepository;
use crate::db::models::CompanyRow;
use crate::error::ApiError;

/// Company service containing business logic
pub struct CompanyService {
    pool: Pool<Postgres>,
}

impl CompanyService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn create(&self, company: &CompanyNew) -> Result<CompanyRow, ApiError> {
        info!("Service: creating company handle={}", company.handle);
        CompanyRepository::create(&self.pool, company).await
    }

    pub async fn find_all(&self, filters: &CompanyFilters) -> Result<Vec<CompanyRow>, ApiError> {
        CompanyRepository::find_all(&self.pool, filters).await
    }

    pub async fn get(&self, handle: &str) -> Result<CompanyRow, ApiError> {
        CompanyRepository::get(&self.pool, handle).await
    }

    pub async fn update(
        &self,
        handle: &str,
        data: &CompanyUpdate,
    ) -> Result<CompanyRow, ApiError> {
        info!("Service: updating company handle={}", handle);
        CompanyRepository::update(&self.pool, handle, data).await
    }

    pub async fn remove(&self, handle: &str) -> Result<String, ApiError> {
        info!("Service: removing company handle={}", handle);
        CompanyRepository::remove(&self.pool, handle).await
    }
}

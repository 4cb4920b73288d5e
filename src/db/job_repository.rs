use sqlx::{Pool, Postgres};
use std::collections::HashMap;
use tracing::debug;

use crate::api::job::models::{JobFilters, JobNew, JobUpdate};
use crate::db::company_repository::CompanyRepository;
use crate::db::models::JobRow;
use crate::db::sql::{sql_for_partial_update, CompiledUpdate, SqlValue};
use crate::error::ApiError;

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Repository for job database operations
pub struct JobRepository;

impl JobRepository {
    /// Insert a new job and return the full record.
    ///
    /// The referenced company must exist; the check runs before the insert so
    /// a missing company leaves no row behind.
    pub async fn create(pool: &Pool<Postgres>, job: &JobNew) -> Result<JobRow, ApiError> {
        debug!(
            "Creating job: title={}, company={}",
            job.title, job.company_handle
        );

        let company = CompanyRepository::get(pool, &job.company_handle).await?;

        let row = sqlx::query_as::<_, JobRow>(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, title, salary, equity, company_handle",
        )
        .bind(&job.title)
        .bind(job.salary)
        .bind(job.equity)
        .bind(&company.handle)
        .fetch_one(pool)
        .await?;

        debug!("Job created with id={}", row.id);
        Ok(row)
    }

    /// Assemble the filtered listing statement.
    ///
    /// Predicates are appended only for filters that are present, ANDed
    /// together, with positions following the parameter list. The equity flag
    /// is boolean-only: `Some(true)` appends `equity > 0`, anything else
    /// appends nothing.
    pub fn build_list_query(filters: &JobFilters) -> Result<(String, Vec<SqlValue>), ApiError> {
        if let Some(min_salary) = filters.min_salary {
            if min_salary < 0 {
                return Err(ApiError::InvalidInput(
                    "minSalary must be non-negative".to_string(),
                ));
            }
        }

        let mut sql = format!("SELECT {} FROM jobs", JOB_COLUMNS);
        let mut predicates: Vec<String> = Vec::new();
        let mut params: Vec<SqlValue> = Vec::new();

        if let Some(title) = &filters.title {
            params.push(SqlValue::Text(format!("%{}%", title)));
            predicates.push(format!("title ILIKE ${}", params.len()));
        }

        if let Some(min_salary) = filters.min_salary {
            params.push(SqlValue::Int(min_salary));
            predicates.push(format!("salary >= ${}", params.len()));
        }

        if filters.has_equity == Some(true) {
            params.push(SqlValue::Numeric(rust_decimal::Decimal::ZERO));
            predicates.push(format!("equity > ${}", params.len()));
        }

        if !predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }

        sql.push_str(" ORDER BY company_handle");

        Ok((sql, params))
    }

    /// List jobs matching the given filters, ordered by company handle
    pub async fn find_all(
        pool: &Pool<Postgres>,
        filters: &JobFilters,
    ) -> Result<Vec<JobRow>, ApiError> {
        let (sql, params) = Self::build_list_query(filters)?;
        debug!("Listing jobs: {}", sql);

        let mut query = sqlx::query_as::<_, JobRow>(&sql);
        for value in params {
            query = value.bind_query_as(query);
        }

        Ok(query.fetch_all(pool).await?)
    }

    /// Fetch a single job by id
    pub async fn get(pool: &Pool<Postgres>, id: i32) -> Result<JobRow, ApiError> {
        let sql = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);

        sqlx::query_as::<_, JobRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("No job with id {}", id)))
    }

    /// Apply a partial update and return the updated record.
    ///
    /// Only the payload's mutable fields are compiled into the SET fragment;
    /// the id is appended as the final positional parameter. An empty payload
    /// is rejected before any statement is issued.
    pub async fn update(
        pool: &Pool<Postgres>,
        id: i32,
        data: &JobUpdate,
    ) -> Result<JobRow, ApiError> {
        let CompiledUpdate { set_cols, values } =
            sql_for_partial_update(data.set_pairs(), &HashMap::new())?;

        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
            set_cols,
            values.len() + 1,
            JOB_COLUMNS,
        );
        debug!("Updating job {}: {}", id, sql);

        let mut query = sqlx::query_as::<_, JobRow>(&sql);
        for value in values {
            query = value.bind_query_as(query);
        }

        query
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("No job with id {}", id)))
    }

    /// Delete a job by id, returning the deleted id
    pub async fn remove(pool: &Pool<Postgres>, id: i32) -> Result<i32, ApiError> {
        let deleted: Option<(i32,)> =
            sqlx::query_as("DELETE FROM jobs WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(pool)
                .await?;

        deleted
            .map(|row| row.0)
            .ok_or_else(|| ApiError::NotFound(format!("No job with id {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn list_query_without_filters_has_no_where_clause() {
        let (sql, params) = JobRepository::build_list_query(&JobFilters::default()).unwrap();

        assert_eq!(
            sql,
            "SELECT id, title, salary, equity, company_handle FROM jobs \
             ORDER BY company_handle"
        );
        assert!(params.is_empty());
    }

    #[test]
    fn list_query_with_all_filters_numbers_predicates_contiguously() {
        let filters = JobFilters {
            title: Some("engineer".to_string()),
            min_salary: Some(50000),
            has_equity: Some(true),
        };

        let (sql, params) = JobRepository::build_list_query(&filters).unwrap();

        assert_eq!(
            sql,
            "SELECT id, title, salary, equity, company_handle FROM jobs \
             WHERE title ILIKE $1 AND salary >= $2 AND equity > $3 \
             ORDER BY company_handle"
        );
        assert_eq!(
            params,
            vec![
                SqlValue::Text("%engineer%".to_string()),
                SqlValue::Int(50000),
                SqlValue::Numeric(Decimal::ZERO),
            ]
        );
    }

    #[test]
    fn negative_min_salary_is_rejected() {
        let filters = JobFilters {
            min_salary: Some(-1),
            ..Default::default()
        };

        let err = JobRepository::build_list_query(&filters).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn false_or_absent_equity_flag_emits_no_predicate() {
        for has_equity in [Some(false), None] {
            let filters = JobFilters {
                has_equity,
                ..Default::default()
            };

            let (sql, params) = JobRepository::build_list_query(&filters).unwrap();
            assert!(!sql.contains("WHERE"));
            assert!(!sql.contains("equity >"));
            assert!(params.is_empty());
        }
    }

    #[test]
    fn single_filter_starts_at_position_one() {
        let filters = JobFilters {
            has_equity: Some(true),
            ..Default::default()
        };

        let (sql, params) = JobRepository::build_list_query(&filters).unwrap();
        assert!(sql.contains("WHERE equity > $1"));
        assert_eq!(params.len(), 1);
    }
}

use sqlx::{Pool, Postgres};
use std::collections::HashMap;
use tracing::debug;

use crate::api::company::models::{CompanyFilters, CompanyNew, CompanyUpdate};
use crate::db::models::CompanyRow;
use crate::db::sql::{sql_for_partial_update, CompiledUpdate, SqlValue};
use crate::error::ApiError;

const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

/// Repository for company database operations
pub struct CompanyRepository;

impl CompanyRepository {
    /// Insert a new company and return the full record.
    ///
    /// Rejects a handle that is already taken before inserting.
    pub async fn create(pool: &Pool<Postgres>, company: &CompanyNew) -> Result<CompanyRow, ApiError> {
        debug!("Creating company: handle={}", company.handle);

        let duplicate: Option<(String,)> =
            sqlx::query_as("SELECT handle FROM companies WHERE handle = $1")
                .bind(&company.handle)
                .fetch_optional(pool)
                .await?;

        if duplicate.is_some() {
            return Err(ApiError::InvalidInput(format!(
                "Duplicate company: {}",
                company.handle
            )));
        }

        let row = sqlx::query_as::<_, CompanyRow>(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING handle, name, description, num_employees, logo_url",
        )
        .bind(&company.handle)
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.num_employees)
        .bind(&company.logo_url)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Assemble the filtered listing statement
    pub fn build_list_query(
        filters: &CompanyFilters,
    ) -> Result<(String, Vec<SqlValue>), ApiError> {
        if let (Some(min), Some(max)) = (filters.min_employees, filters.max_employees) {
            if min > max {
                return Err(ApiError::InvalidInput(
                    "minEmployees cannot be greater than maxEmployees".to_string(),
                ));
            }
        }

        let mut sql = format!("SELECT {} FROM companies", COMPANY_COLUMNS);
        let mut predicates: Vec<String> = Vec::new();
        let mut params: Vec<SqlValue> = Vec::new();

        if let Some(name) = &filters.name {
            params.push(SqlValue::Text(format!("%{}%", name)));
            predicates.push(format!("name ILIKE ${}", params.len()));
        }

        if let Some(min_employees) = filters.min_employees {
            params.push(SqlValue::Int(min_employees));
            predicates.push(format!("num_employees >= ${}", params.len()));
        }

        if let Some(max_employees) = filters.max_employees {
            params.push(SqlValue::Int(max_employees));
            predicates.push(format!("num_employees <= ${}", params.len()));
        }

        if !predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }

        sql.push_str(" ORDER BY name");

        Ok((sql, params))
    }

    /// List companies matching the given filters, ordered by name
    pub async fn find_all(
        pool: &Pool<Postgres>,
        filters: &CompanyFilters,
    ) -> Result<Vec<CompanyRow>, ApiError> {
        let (sql, params) = Self::build_list_query(filters)?;
        debug!("Listing companies: {}", sql);

        let mut query = sqlx::query_as::<_, CompanyRow>(&sql);
        for value in params {
            query = value.bind_query_as(query);
        }

        Ok(query.fetch_all(pool).await?)
    }

    /// Fetch a single company by handle
    pub async fn get(pool: &Pool<Postgres>, handle: &str) -> Result<CompanyRow, ApiError> {
        let sql = format!("SELECT {} FROM companies WHERE handle = $1", COMPANY_COLUMNS);

        sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(handle)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("No company with handle {}", handle)))
    }

    /// Apply a partial update and return the updated record.
    ///
    /// The handle itself is not part of the payload type and can never be
    /// retargeted; it only appears as the final WHERE parameter.
    pub async fn update(
        pool: &Pool<Postgres>,
        handle: &str,
        data: &CompanyUpdate,
    ) -> Result<CompanyRow, ApiError> {
        let field_to_column = HashMap::from([
            ("numEmployees", "num_employees"),
            ("logoUrl", "logo_url"),
        ]);
        let CompiledUpdate { set_cols, values } =
            sql_for_partial_update(data.set_pairs(), &field_to_column)?;

        let sql = format!(
            "UPDATE companies SET {} WHERE handle = ${} RETURNING {}",
            set_cols,
            values.len() + 1,
            COMPANY_COLUMNS,
        );
        debug!("Updating company {}: {}", handle, sql);

        let mut query = sqlx::query_as::<_, CompanyRow>(&sql);
        for value in values {
            query = value.bind_query_as(query);
        }

        query
            .bind(handle)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("No company with handle {}", handle)))
    }

    /// Delete a company by handle, returning the deleted handle
    pub async fn remove(pool: &Pool<Postgres>, handle: &str) -> Result<String, ApiError> {
        let deleted: Option<(String,)> =
            sqlx::query_as("DELETE FROM companies WHERE handle = $1 RETURNING handle")
                .bind(handle)
                .fetch_optional(pool)
                .await?;

        deleted
            .map(|row| row.0)
            .ok_or_else(|| ApiError::NotFound(format!("No company with handle {}", handle)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_without_filters_orders_by_name() {
        let (sql, params) =
            CompanyRepository::build_list_query(&CompanyFilters::default()).unwrap();

        assert_eq!(
            sql,
            "SELECT handle, name, description, num_employees, logo_url FROM companies \
             ORDER BY name"
        );
        assert!(params.is_empty());
    }

    #[test]
    fn list_query_with_employee_range() {
        let filters = CompanyFilters {
            name: None,
            min_employees: Some(10),
            max_employees: Some(500),
        };

        let (sql, params) = CompanyRepository::build_list_query(&filters).unwrap();

        assert!(sql.contains("WHERE num_employees >= $1 AND num_employees <= $2"));
        assert_eq!(params, vec![SqlValue::Int(10), SqlValue::Int(500)]);
    }

    #[test]
    fn inverted_employee_range_is_rejected() {
        let filters = CompanyFilters {
            name: None,
            min_employees: Some(100),
            max_employees: Some(10),
        };

        let err = CompanyRepository::build_list_query(&filters).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn name_filter_is_substring_matched() {
        let filters = CompanyFilters {
            name: Some("net".to_string()),
            min_employees: None,
            max_employees: None,
        };

        let (sql, params) = CompanyRepository::build_list_query(&filters).unwrap();

        assert!(sql.contains("name ILIKE $1"));
        assert_eq!(params, vec![SqlValue::Text("%net%".to_string())]);
    }
}

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::db::sql::SqlValue;

fn validate_equity(equity: &Decimal) -> Result<(), ValidationError> {
    if *equity < Decimal::ZERO || *equity > Decimal::ONE {
        return Err(ValidationError::new("equity_out_of_range"));
    }
    Ok(())
}

/// Payload for creating a job
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobNew {
    #[validate(length(min = 1, max = 100, message = "Title must be 1 to 100 characters"))]
    pub title: String,

    #[validate(range(min = 0, message = "Salary must be non-negative"))]
    pub salary: i32,

    #[validate(custom(function = validate_equity))]
    pub equity: Decimal,

    #[validate(length(min = 1, max = 25, message = "Company handle must be 1 to 25 characters"))]
    pub company_handle: String,
}

/// Payload for a partial job update.
///
/// `id` and `companyHandle` are deliberately not representable here; unknown
/// fields fail deserialization, so retargeting attempts never reach the model.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[validate(length(min = 1, max = 100, message = "Title must be 1 to 100 characters"))]
    pub title: Option<String>,

    #[validate(range(min = 0, message = "Salary must be non-negative"))]
    pub salary: Option<i32>,

    #[validate(custom(function = validate_equity))]
    pub equity: Option<Decimal>,
}

impl JobUpdate {
    /// Mutable fields present in the payload, in declaration order
    pub fn set_pairs(&self) -> Vec<(&'static str, SqlValue)> {
        let mut pairs = Vec::new();
        if let Some(title) = &self.title {
            pairs.push(("title", SqlValue::Text(title.clone())));
        }
        if let Some(salary) = self.salary {
            pairs.push(("salary", SqlValue::Int(salary)));
        }
        if let Some(equity) = self.equity {
            pairs.push(("equity", SqlValue::Numeric(equity)));
        }
        pairs
    }
}

/// Listing filters; unknown filter names fail query-string deserialization
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilters {
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    pub has_equity: Option<bool>,
}

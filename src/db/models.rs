use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Database representation of a job
#[derive(Debug, FromRow, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: i32,
    pub title: String,
    pub salary: i32,
    /// NUMERIC column; serializes as a decimal string, e.g. "0.456"
    pub equity: Decimal,
    pub company_handle: String,
}

/// Database representation of a company
#[derive(Debug, FromRow, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRow {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

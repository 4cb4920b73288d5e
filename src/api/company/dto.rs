use serde::Serialize;

use crate::db::models::CompanyRow;

/// Response wrapping a single company
#[derive(Serialize)]
pub struct CompanyResponse {
    pub company: CompanyRow,
}

/// Response wrapping a company listing
#[derive(Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanyRow>,
}

/// Response for a deleted company
#[derive(Serialize)]
pub struct CompanyDeletedResponse {
    pub deleted: String,
}

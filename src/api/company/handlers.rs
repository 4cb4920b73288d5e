use actix_web::{
    delete, get, patch, post,
    web::{scope, Data, Path, Query, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::dto::{CompanyDeletedResponse, CompanyListResponse, CompanyResponse};
use super::models::{CompanyFilters, CompanyNew, CompanyUpdate};
use super::service::CompanyService;
use crate::api::auth::AdminUser;
use crate::error::ApiError;

#[post("")]
async fn create_company(
    service: Data<CompanyService>,
    _admin: AdminUser,
    body: Json<CompanyNew>,
) -> Result<HttpResponse, ApiError> {
    let company = service.create(&body).await?;
    Ok(HttpResponse::Created().json(CompanyResponse { company }))
}

#[get("")]
async fn list_companies(
    service: Data<CompanyService>,
    filters: Query<CompanyFilters>,
) -> Result<HttpResponse, ApiError> {
    let companies = service.find_all(&filters).await?;
    Ok(HttpResponse::Ok().json(CompanyListResponse { companies }))
}

#[get("/{handle}")]
async fn get_company(
    service: Data<CompanyService>,
    handle: Path<String>,
) -> Result<HttpResponse, ApiError> {
    let company = service.get(&handle).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse { company }))
}

#[patch("/{handle}")]
async fn update_company(
    service: Data<CompanyService>,
    _admin: AdminUser,
    handle: Path<String>,
    body: Json<CompanyUpdate>,
) -> Result<HttpResponse, ApiError> {
    let company = service.update(&handle, &body).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse { company }))
}

#[delete("/{handle}")]
async fn delete_company(
    service: Data<CompanyService>,
    _admin: AdminUser,
    handle: Path<String>,
) -> Result<HttpResponse, ApiError> {
    let deleted = service.remove(&handle).await?;
    Ok(HttpResponse::Ok().json(CompanyDeletedResponse { deleted }))
}

pub fn company_config(config: &mut ServiceConfig) {
    config.service(
        scope("companies")
            .service(create_company)
            .service(list_companies)
            .service(get_company)
            .service(update_company)
            .service(delete_company),
    );
}

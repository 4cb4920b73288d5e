use actix_web::{
    delete, get, patch, post,
    web::{scope, Data, Path, Query, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::dto::{JobDeletedResponse, JobListResponse, JobResponse};
use super::models::{JobFilters, JobNew, JobUpdate};
use super::service::JobService;
use crate::api::auth::AdminUser;
use crate::error::ApiError;

#[post("")]
async fn create_job(
    service: Data<JobService>,
    _admin: AdminUser,
    body: Json<JobNew>,
) -> Result<HttpResponse, ApiError> {
    let job = service.create(&body).await?;
    Ok(HttpResponse::Created().json(JobResponse { job }))
}

#[get("")]
async fn list_jobs(
    service: Data<JobService>,
    filters: Query<JobFilters>,
) -> Result<HttpResponse, ApiError> {
    let jobs = service.find_all(&filters).await?;
    Ok(HttpResponse::Ok().json(JobListResponse { jobs }))
}

#[get("/{id}")]
async fn get_job(service: Data<JobService>, id: Path<i32>) -> Result<HttpResponse, ApiError> {
    let job = service.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JobResponse { job }))
}

#[patch("/{id}")]
async fn update_job(
    service: Data<JobService>,
    _admin: AdminUser,
    id: Path<i32>,
    body: Json<JobUpdate>,
) -> Result<HttpResponse, ApiError> {
    let job = service.update(id.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(JobResponse { job }))
}

#[delete("/{id}")]
async fn delete_job(
    service: Data<JobService>,
    _admin: AdminUser,
    id: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let deleted = service.remove(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JobDeletedResponse { deleted }))
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(
        scope("jobs")
            .service(create_job)
            .service(list_jobs)
            .service(get_job)
            .service(update_job)
            .service(delete_job),
    );
}

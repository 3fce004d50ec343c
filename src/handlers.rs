use actix_web::{delete, get, post, web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::core::{self, Job, JobDocument, JobPayload};
use crate::errors::JobTrackerError;
use crate::job::JobRepository;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limit: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(healthz)
        .service(info)
        .service(get_jobs)
        .service(get_job)
        .service(add_job)
        .service(edit_job)
        .service(delete_job)
        .default_service(web::route().to(not_found));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        JobTrackerError::InvalidBody {
            reason: err.to_string(),
        }
        .into()
    })
}

#[get("/healthz")]
async fn healthz(jobs: web::Data<dyn JobRepository>) -> Result<HttpResponse, JobTrackerError> {
    jobs.ping().await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}

#[get("/info")]
async fn info() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/get-jobs")]
async fn get_jobs(
    query: web::Query<ListQuery>,
    jobs: web::Data<dyn JobRepository>,
) -> Result<HttpResponse, JobTrackerError> {
    let limit = core::parse_limit(query.limit.as_deref())?;
    debug!("Listing jobs with limit {:?}", limit);

    let documents = jobs.list(limit).await?;
    let response: Vec<Job> = documents.into_iter().map(Job::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

#[get("/get-job/{id}")]
async fn get_job(
    id: web::Path<String>,
    jobs: web::Data<dyn JobRepository>,
) -> Result<HttpResponse, JobTrackerError> {
    let id = id.into_inner();
    let object_id = core::parse_id(&id)?;

    match jobs.get(object_id).await? {
        Some(document) => Ok(HttpResponse::Ok().json(Job::from(document))),
        None => Err(JobTrackerError::JobNotFound { id }),
    }
}

#[post("/add-job")]
async fn add_job(
    body: web::Json<JobPayload>,
    jobs: web::Data<dyn JobRepository>,
) -> Result<HttpResponse, JobTrackerError> {
    let document = JobDocument::new(body.into_inner(), Utc::now());
    let ack = jobs.insert(document).await?;
    info!("Job {} created", &ack.inserted_id);

    Ok(HttpResponse::Ok().json(ack))
}

#[post("/edit-job/{id}")]
async fn edit_job(
    id: web::Path<String>,
    body: web::Json<JobPayload>,
    jobs: web::Data<dyn JobRepository>,
) -> Result<HttpResponse, JobTrackerError> {
    let object_id = core::parse_id(&id)?;
    let ack = jobs
        .update(object_id, body.into_inner(), Utc::now())
        .await?;
    debug!("Edit of job {} matched {} document(s)", id, ack.matched_count);

    Ok(HttpResponse::Ok().json(ack))
}

#[delete("/delete-job/{id}")]
async fn delete_job(
    id: web::Path<String>,
    jobs: web::Data<dyn JobRepository>,
) -> Result<HttpResponse, JobTrackerError> {
    let object_id = core::parse_id(&id)?;
    let ack = jobs.delete(object_id).await?;
    debug!("Delete of job {} removed {} document(s)", id, ack.deleted_count);

    Ok(HttpResponse::Ok().json(ack))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Route not found" }))
}

//! Job posting handlers: public listing plus employer-owned mutations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use jobboard_models::{
    EmployerSummary, JobFilter, JobId, JobPosting, JobType, Role,
};

use crate::auth::{require_approval, require_role, Gate};
use crate::error::{ApiError, ApiResult};
use crate::extract::{AppJson, AppQuery};
use crate::state::AppState;

/// A posting enriched with its owning employer's summary. `employer` is
/// null when the owning account no longer resolves.
#[derive(Debug, Serialize)]
pub struct JobWithEmployer {
    #[serde(flatten)]
    pub job: JobPosting,
    pub employer: Option<EmployerSummary>,
}

/// Attach employer summaries to a batch of postings. Read enrichment only;
/// dangling references resolve to null rather than failing the listing.
pub async fn attach_employers(
    state: &AppState,
    jobs: Vec<JobPosting>,
) -> ApiResult<Vec<JobWithEmployer>> {
    let mut enriched = Vec::with_capacity(jobs.len());
    for job in jobs {
        let employer = state
            .accounts
            .get(&job.employer_id)
            .await
            .map_err(|e| ApiError::storage("Failed to fetch jobs", e))?
            .map(|a| EmployerSummary::from(&a));
        enriched.push(JobWithEmployer { job, employer });
    }
    Ok(enriched)
}

/// Browse all postings with optional equality filters. Public.
pub async fn list_jobs(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<JobFilter>,
) -> ApiResult<Json<Vec<JobWithEmployer>>> {
    let jobs = state
        .jobs
        .find_where(|j| filter.matches(j))
        .await
        .map_err(|e| ApiError::storage("Failed to fetch jobs", e))?;
    Ok(Json(attach_employers(&state, jobs).await?))
}

/// Create-posting payload.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub job_type: JobType,
    #[validate(length(min = 1))]
    pub salary_range: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Create a posting. Employer only, approval required.
pub async fn create_job(
    State(state): State<AppState>,
    Gate(caller): Gate,
    AppJson(request): AppJson<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<JobPosting>)> {
    require_role(&caller, &[Role::Employer])?;
    require_approval(&caller)?;

    request
        .validate()
        .map_err(|_| ApiError::bad_request("All fields are required"))?;

    let job = JobPosting::new(
        request.title,
        request.company,
        request.location,
        request.job_type,
        request.salary_range,
        request.description,
        caller.id,
    );

    let job = state
        .jobs
        .insert(job)
        .await
        .map_err(|e| ApiError::storage("Failed to create job", e))?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// Update-posting payload. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary_range: Option<String>,
    pub description: Option<String>,
}

/// Update a posting. Employer only, approval required, owner only.
pub async fn update_job(
    State(state): State<AppState>,
    Gate(caller): Gate,
    Path(job_id): Path<JobId>,
    AppJson(request): AppJson<UpdateJobRequest>,
) -> ApiResult<Json<JobPosting>> {
    require_role(&caller, &[Role::Employer])?;
    require_approval(&caller)?;

    let mut job = state
        .jobs
        .get(&job_id)
        .await
        .map_err(|e| ApiError::storage("Failed to update job", e))?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    if job.employer_id != caller.id {
        return Err(ApiError::forbidden("Unauthorized"));
    }

    if let Some(title) = request.title {
        job.title = title;
    }
    if let Some(company) = request.company {
        job.company = company;
    }
    if let Some(location) = request.location {
        job.location = location;
    }
    if let Some(job_type) = request.job_type {
        job.job_type = job_type;
    }
    if let Some(salary_range) = request.salary_range {
        job.salary_range = salary_range;
    }
    if let Some(description) = request.description {
        job.description = description;
    }

    let job = state
        .jobs
        .update(job)
        .await
        .map_err(|e| ApiError::storage("Failed to update job", e))?;

    Ok(Json(job))
}

/// Delete-posting response.
#[derive(Debug, Serialize)]
pub struct DeleteJobResponse {
    pub message: String,
}

/// Delete a posting. Employer only, owner only.
///
/// Unlike update, the approval check is deliberately not applied here:
/// approval gates creation and update, not cleanup. Applications pointing at
/// the deleted posting are left in place.
pub async fn delete_job(
    State(state): State<AppState>,
    Gate(caller): Gate,
    Path(job_id): Path<JobId>,
) -> ApiResult<Json<DeleteJobResponse>> {
    require_role(&caller, &[Role::Employer])?;

    let job = state
        .jobs
        .get(&job_id)
        .await
        .map_err(|e| ApiError::storage("Failed to delete job", e))?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    if job.employer_id != caller.id {
        return Err(ApiError::forbidden("Unauthorized"));
    }

    state
        .jobs
        .delete(&job_id)
        .await
        .map_err(|e| ApiError::storage("Failed to delete job", e))?;

    Ok(Json(DeleteJobResponse {
        message: "Job deleted".to_string(),
    }))
}

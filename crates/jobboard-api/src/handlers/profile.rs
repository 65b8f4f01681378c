//! Profile handlers: view and update the caller's own account.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use jobboard_models::AccountView;

use crate::auth::Gate;
use crate::error::{ApiError, ApiResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// View the caller's own profile. Any authenticated account.
pub async fn get_profile(Gate(caller): Gate) -> ApiResult<Json<AccountView>> {
    Ok(Json(AccountView::from(caller)))
}

/// Profile update payload. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub resume_url: Option<String>,
}

/// Update the caller's own profile fields. Operates on the caller's id
/// only; no other account is reachable through this path.
pub async fn update_profile(
    State(state): State<AppState>,
    Gate(caller): Gate,
    AppJson(request): AppJson<UpdateProfileRequest>,
) -> ApiResult<Json<AccountView>> {
    let mut account = caller;

    if let Some(bio) = request.bio {
        account.bio = bio;
    }
    if let Some(skills) = request.skills {
        account.skills = skills;
    }
    if let Some(resume_url) = request.resume_url {
        account.resume_url = resume_url;
    }

    let account = match state.accounts.update(account).await {
        Ok(a) => a,
        Err(jobboard_store::StoreError::NotFound(_)) => {
            return Err(ApiError::not_found("User not found"));
        }
        Err(e) => return Err(ApiError::storage("Failed to update profile", e)),
    };

    Ok(Json(AccountView::from(account)))
}

//! Registration and login handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use jobboard_models::{Account, AccountView, Role};

use crate::error::{ApiError, ApiResult};
use crate::extract::AppJson;
use crate::security::{hash_password, verify_password};
use crate::state::AppState;

/// Registration payload.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub role: String,
}

/// Token plus the sanitized account, returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AccountView,
}

/// Register a new account. Admin accounts are not self-service.
pub async fn register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    request
        .validate()
        .map_err(|_| ApiError::bad_request("All fields are required"))?;

    let role: Role = request
        .role
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid role"))?;
    if role == Role::Admin {
        return Err(ApiError::bad_request("Invalid role"));
    }

    let password_hash = hash_password(&request.password)?;
    let account = Account::new(request.name, request.email, password_hash, role);

    let account = match state.accounts.insert(account).await {
        Ok(a) => a,
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::bad_request("Email already registered"));
        }
        Err(e) => return Err(ApiError::storage("Failed to register", e)),
    };

    let token = state
        .codec
        .issue(&account.id)
        .map_err(|_| ApiError::internal("Failed to register"))?;

    info!(account_id = %account.id, role = %account.role, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: AccountView::from(account),
        }),
    ))
}

/// Login payload.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Exchange credentials for a token.
///
/// Blocked accounts may still log in; the gate rejects them on every
/// protected operation afterwards.
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    request
        .validate()
        .map_err(|_| ApiError::bad_request("All fields are required"))?;

    let account = state
        .accounts
        .find_by_email(&request.email)
        .await
        .map_err(|e| ApiError::storage("Failed to log in", e))?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !verify_password(&account.password_hash, &request.password) {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state
        .codec
        .issue(&account.id)
        .map_err(|_| ApiError::internal("Failed to log in"))?;

    Ok(Json(AuthResponse {
        token,
        user: AccountView::from(account),
    }))
}

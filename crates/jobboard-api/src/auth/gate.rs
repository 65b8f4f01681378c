//! The access gate.
//!
//! Every protected operation runs the same pipeline, in order:
//! authenticate (token → resolvable, non-blocked account), then
//! [`require_role`], then [`require_approval`]. The checks short-circuit —
//! the first failure is returned verbatim and later checks never run. Role
//! and approval are evaluated against the snapshot resolved at
//! authentication time, never re-fetched mid-request.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use tracing::warn;

use jobboard_models::{Account, Role};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Gate failure messages. This set is closed; resource handlers must not
/// invent new gate-level errors.
pub const NO_TOKEN: &str = "No token provided";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const USER_NOT_FOUND: &str = "User not found";
pub const ACCOUNT_BLOCKED: &str = "Your account has been blocked";
pub const UNAUTHORIZED_ACCESS: &str = "Unauthorized access";
pub const PENDING_APPROVAL: &str = "Your account is pending approval by the admin";
pub const AUTH_FAILED: &str = "Authentication failed";

/// Authentication check: bearer token → vetted account snapshot.
///
/// Failure ladder: missing token 401, invalid token 401, unresolvable
/// account 404, blocked account 403, store fault 500 (fail-closed).
pub async fn authenticate(state: &AppState, bearer: Option<&str>) -> ApiResult<Account> {
    let token = bearer.ok_or_else(|| ApiError::unauthorized(NO_TOKEN))?;

    let account_id = state
        .codec
        .verify(token)
        .ok_or_else(|| ApiError::unauthorized(INVALID_TOKEN))?;

    let account = state
        .accounts
        .get(&account_id)
        .await
        .map_err(|e| {
            warn!(error = %e, "Store failure while resolving caller");
            ApiError::internal(AUTH_FAILED)
        })?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    if account.is_blocked {
        return Err(ApiError::forbidden(ACCOUNT_BLOCKED));
    }

    Ok(account)
}

/// Role check: pure membership test, no storage contact.
pub fn require_role(account: &Account, allowed: &[Role]) -> ApiResult<()> {
    if allowed.contains(&account.role) {
        Ok(())
    } else {
        Err(ApiError::forbidden(UNAUTHORIZED_ACCESS))
    }
}

/// Approval check. Total over all roles: only an unapproved employer fails,
/// every other role passes vacuously, so call sites never need to be
/// role-conditional.
pub fn require_approval(account: &Account) -> ApiResult<()> {
    match account.role {
        Role::Employer if !account.is_approved => Err(ApiError::forbidden(PENDING_APPROVAL)),
        Role::Employer | Role::JobSeeker | Role::Admin => Ok(()),
    }
}

/// Extractor form of the authentication check.
///
/// Handlers take `Gate(account)` as an argument; the resolved account is
/// passed explicitly from there on, never read from ambient state.
#[derive(Debug, Clone)]
pub struct Gate(pub Account);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Gate
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let bearer = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .ok();
        let token = bearer.as_ref().map(|TypedHeader(auth)| auth.token());
        let account = authenticate(&state, token).await?;
        Ok(Gate(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(role: Role) -> Account {
        Account::new("T", format!("{role}@test"), "hash", role)
    }

    #[test]
    fn role_check_is_a_membership_test() {
        let employer = account(Role::Employer);
        assert!(require_role(&employer, &[Role::Employer]).is_ok());
        assert!(require_role(&employer, &[Role::JobSeeker, Role::Employer]).is_ok());
        let err = require_role(&employer, &[Role::Admin]).unwrap_err();
        assert_eq!(err.to_string(), UNAUTHORIZED_ACCESS);
    }

    #[test]
    fn approval_check_only_bites_unapproved_employers() {
        let pending = account(Role::Employer);
        assert!(!pending.is_approved);
        let err = require_approval(&pending).unwrap_err();
        assert_eq!(err.to_string(), PENDING_APPROVAL);

        let mut approved = account(Role::Employer);
        approved.is_approved = true;
        assert!(require_approval(&approved).is_ok());

        // Vacuously true for every other role, even with the flag unset.
        let mut seeker = account(Role::JobSeeker);
        seeker.is_approved = false;
        assert!(require_approval(&seeker).is_ok());
        let mut admin = account(Role::Admin);
        admin.is_approved = false;
        assert!(require_approval(&admin).is_ok());
    }
}

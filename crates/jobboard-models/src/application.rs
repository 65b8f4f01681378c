//! Application models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::AccountId;
use crate::job::JobId;

/// Unique identifier for an application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    /// Generate a new random application ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApplicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ApplicationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One job seeker's interest in one posting.
///
/// At most one record exists per `(job_id, applicant_id)` pair; the store
/// enforces this at insert time. There is no withdraw or update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: AccountId,
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// Create a new application for `applicant_id` against `job_id`.
    pub fn new(job_id: JobId, applicant_id: AccountId) -> Self {
        Self {
            id: ApplicationId::new(),
            job_id,
            applicant_id,
            created_at: Utc::now(),
        }
    }
}

//! Job posting models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::AccountId;

/// Unique identifier for a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Employment type for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Remote")]
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobType {
    type Err = UnknownJobType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(JobType::FullTime),
            "Part-time" => Ok(JobType::PartTime),
            "Remote" => Ok(JobType::Remote),
            other => Err(UnknownJobType(other.to_string())),
        }
    }
}

/// Error for an unrecognized job type string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job type: {0}")]
pub struct UnknownJobType(pub String);

/// A job posting owned by an employer account.
///
/// `employer_id` is set at creation and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_range: String,
    pub description: String,
    pub employer_id: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPosting {
    /// Create a new posting owned by `employer_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        job_type: JobType,
        salary_range: impl Into<String>,
        description: impl Into<String>,
        employer_id: AccountId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            job_type,
            salary_range: salary_range.into(),
            description: description.into(),
            employer_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Equality filters for the public listing. `None` means no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    pub location: Option<String>,
    pub job_type: Option<JobType>,
}

impl JobFilter {
    /// True when the posting satisfies every present filter field.
    pub fn matches(&self, job: &JobPosting) -> bool {
        if let Some(location) = &self.location {
            if &job.location != location {
                return false;
            }
        }
        if let Some(job_type) = self.job_type {
            if job.job_type != job_type {
                return false;
            }
        }
        true
    }
}

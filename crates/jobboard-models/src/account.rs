//! Account and role models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Platform role. Closed set; authorization sites match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    JobSeeker,
    Employer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::JobSeeker => "jobseeker",
            Role::Employer => "employer",
            Role::Admin => "admin",
        }
    }

    /// Default approval state for a freshly registered account.
    /// Employers require manual activation by an admin.
    pub fn approved_by_default(&self) -> bool {
        match self {
            Role::Employer => false,
            Role::JobSeeker | Role::Admin => true,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jobseeker" => Ok(Role::JobSeeker),
            "employer" => Ok(Role::Employer),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error for an unrecognized role string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Account record as held in the identity store.
///
/// The credential hash never leaves the store boundary in responses; use
/// [`AccountView`] for anything serialized outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub is_approved: bool,
    pub is_blocked: bool,
    /// Job-seeker profile fields; empty strings for other roles.
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub resume_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with role-dependent approval defaults.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            is_approved: role.approved_by_default(),
            is_blocked: false,
            bio: String::new(),
            skills: String::new(),
            resume_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Outward-facing projection of an account: credential hash stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountView {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_approved: bool,
    pub is_blocked: bool,
    pub bio: String,
    pub skills: String,
    pub resume_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountView {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            email: a.email.clone(),
            role: a.role,
            is_approved: a.is_approved,
            is_blocked: a.is_blocked,
            bio: a.bio.clone(),
            skills: a.skills.clone(),
            resume_url: a.resume_url.clone(),
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

impl From<Account> for AccountView {
    fn from(a: Account) -> Self {
        Self::from(&a)
    }
}

/// Employer summary attached to job listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerSummary {
    pub id: AccountId,
    pub name: String,
    pub email: String,
}

impl From<&Account> for EmployerSummary {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            email: a.email.clone(),
        }
    }
}

/// Applicant profile attached to an employer's applicant listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub skills: String,
    pub resume_url: String,
}

impl From<&Account> for ApplicantProfile {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            email: a.email.clone(),
            bio: a.bio.clone(),
            skills: a.skills.clone(),
            resume_url: a.resume_url.clone(),
        }
    }
}

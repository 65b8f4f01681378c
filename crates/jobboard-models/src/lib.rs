//! Shared data models for the JobBoard backend.
//!
//! This crate provides Serde-serializable types for:
//! - Accounts and roles
//! - Job postings
//! - Applications
//! - Newtype ids shared across crates

pub mod account;
pub mod application;
pub mod job;

// Re-export common types
pub use account::{Account, AccountId, AccountView, ApplicantProfile, EmployerSummary, Role};
pub use application::{Application, ApplicationId};
pub use job::{JobFilter, JobId, JobPosting, JobType};

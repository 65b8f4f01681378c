//! Document store boundary for the JobBoard backend.
//!
//! This crate provides:
//! - Typed repositories for accounts, job postings, and applications
//! - Simple field-match filtering via predicates
//! - Storage-enforced uniqueness constraints (account email, one
//!   application per `(job_id, applicant_id)` pair)
//!
//! The backing store is an in-process map guarded by an async lock; every
//! uniqueness constraint is checked and committed under a single write lock
//! so racing inserts cannot both succeed.

pub mod accounts;
pub mod applications;
pub mod error;
pub mod jobs;

pub use accounts::AccountRepository;
pub use applications::ApplicationRepository;
pub use error::{StoreError, StoreResult};
pub use jobs::JobRepository;

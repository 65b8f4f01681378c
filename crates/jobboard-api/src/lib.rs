//! Axum HTTP API server for the JobBoard backend.
//!
//! This crate provides:
//! - Stateless bearer-token authentication (HS256)
//! - The access gate: authentication, role, and approval checks run in
//!   fixed order in front of every protected operation
//! - CRUD handlers for postings, applications, profiles, and the admin
//!   moderation surface

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;

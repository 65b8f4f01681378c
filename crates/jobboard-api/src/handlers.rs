//! Request handlers.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod employer;
pub mod health;
pub mod jobs;
pub mod profile;

//! API routes.

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::admin::{
    list_all_applications, list_all_jobs, list_users, pending_employers, review_employer,
    toggle_block,
};
use crate::handlers::applications::{apply, my_applications};
use crate::handlers::auth::{login, register};
use crate::handlers::employer::{applicants, my_jobs};
use crate::handlers::health::health;
use crate::handlers::jobs::{create_job, delete_job, list_jobs, update_job};
use crate::handlers::profile::{get_profile, update_profile};
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    let job_routes = Router::new()
        // Public browse with optional location/job_type filters
        .route("/jobs", get(list_jobs))
        .route("/jobs", post(create_job))
        .route("/jobs/:job_id", put(update_job))
        .route("/jobs/:job_id", delete(delete_job));

    let employer_routes = Router::new()
        .route("/employer/jobs", get(my_jobs))
        .route("/employer/applicants", get(applicants));

    let application_routes = Router::new()
        .route("/applications", post(apply))
        .route("/applications", get(my_applications));

    let profile_routes = Router::new()
        .route("/profile", get(get_profile))
        .route("/profile", put(update_profile));

    let admin_routes = Router::new()
        .route("/admin/users", get(list_users))
        .route("/admin/users/:user_id/block", put(toggle_block))
        .route("/admin/employers/pending", get(pending_employers))
        .route("/admin/employers/:employer_id", put(review_employer))
        .route("/admin/jobs", get(list_all_jobs))
        .route("/admin/applications", get(list_all_applications));

    let api_routes = Router::new()
        .merge(auth_routes)
        .merge(job_routes)
        .merge(employer_routes)
        .merge(application_routes)
        .merge(profile_routes)
        .merge(admin_routes);

    let health_routes = Router::new().route("/health", get(health));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

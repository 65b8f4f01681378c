//! Shared fixtures for API integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use jobboard_api::{create_router, ApiConfig, AppState};
use jobboard_models::{Account, Role};

/// Fresh state backed by empty in-memory repositories.
pub fn test_state() -> AppState {
    let config = ApiConfig {
        jwt_secret: "integration-test-secret".to_string(),
        ..ApiConfig::default()
    };
    AppState::new(config)
}

/// Router over a clone of the state; call once per request.
pub fn app(state: &AppState) -> Router {
    create_router(state.clone())
}

/// Build a JSON request, optionally authenticated.
pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request and decode the JSON body.
pub async fn send(state: &AppState, req: Request<Body>) -> (StatusCode, Value) {
    let response = app(state).oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Register an account through the API, returning (token, user).
pub async fn register(state: &AppState, name: &str, email: &str, role: &str) -> (String, Value) {
    let (status, body) = send(
        state,
        request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": name,
                "email": email,
                "password": "p4ssw0rd!",
                "role": role,
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    (
        body["token"].as_str().unwrap().to_string(),
        body["user"].clone(),
    )
}

/// Seed an admin directly in the store (admins are not self-service) and
/// mint a token for it.
pub async fn seed_admin(state: &AppState) -> String {
    let admin = Account::new("Root", "root@board.test", "unused-hash", Role::Admin);
    let admin = state.accounts.insert(admin).await.unwrap();
    state.codec.issue(&admin.id).unwrap()
}

/// Register an employer and approve it through the admin endpoint.
pub async fn approved_employer(state: &AppState, name: &str, email: &str) -> (String, Value) {
    let (token, user) = register(state, name, email, "employer").await;
    let admin_token = seed_admin_once(state).await;
    let (status, _) = send(
        state,
        request(
            "PUT",
            &format!("/api/admin/employers/{}", user["id"].as_str().unwrap()),
            Some(&admin_token),
            Some(json!({"action": "approve"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    (token, user)
}

/// Seed (or reuse) the fixture admin; email uniqueness makes the second
/// insert fail, so fall back to a fresh token for the existing record.
pub async fn seed_admin_once(state: &AppState) -> String {
    match state
        .accounts
        .find_by_email("root@board.test")
        .await
        .unwrap()
    {
        Some(admin) => state.codec.issue(&admin.id).unwrap(),
        None => seed_admin(state).await,
    }
}

/// Create a posting through the API, returning its JSON.
pub async fn create_job(state: &AppState, token: &str, title: &str, location: &str) -> Value {
    let (status, body) = send(
        state,
        request(
            "POST",
            "/api/jobs",
            Some(token),
            Some(json!({
                "title": title,
                "company": "Acme Co",
                "location": location,
                "job_type": "Full-time",
                "salary_range": "$100k-$130k",
                "description": "Ship reliable software",
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create_job failed: {body}");
    body
}

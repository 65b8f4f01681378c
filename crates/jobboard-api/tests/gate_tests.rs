//! Access gate integration tests.
//!
//! Exercises the full pipeline over HTTP: authentication, role membership,
//! approval gating, check ordering, and the blocked-account rule.

mod common;

use axum::http::StatusCode;
use jobboard_models::AccountId;
use serde_json::json;

use common::{
    approved_employer, create_job, register, request, seed_admin_once, send, test_state,
};

#[tokio::test]
async fn missing_token_fails_at_authentication() {
    let state = test_state();

    // Role-and-approval gated endpoint: failure must be the 401 from the
    // authentication step, never the later checks.
    let (status, body) = send(
        &state,
        request("POST", "/api/jobs", None, Some(json!({"title": "x"}))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No token provided");
}

#[tokio::test]
async fn garbage_token_fails_at_authentication() {
    let state = test_state();
    let (status, body) = send(
        &state,
        request("GET", "/api/admin/users", Some("not.a.token"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn token_for_vanished_account_is_not_found() {
    let state = test_state();
    let (token, user) = register(&state, "Ghost", "ghost@test.dev", "jobseeker").await;

    state
        .accounts
        .delete(&AccountId::from(user["id"].as_str().unwrap()))
        .await
        .unwrap();

    let (status, body) = send(&state, request("GET", "/api/profile", Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn blocked_account_fails_every_gated_operation() {
    let state = test_state();
    let admin_token = seed_admin_once(&state).await;

    let (seeker_token, seeker) = register(&state, "S", "s@test.dev", "jobseeker").await;
    let (employer_token, _) = approved_employer(&state, "E", "e@test.dev").await;

    // Block the seeker.
    let (status, _) = send(
        &state,
        request(
            "PUT",
            &format!("/api/admin/users/{}/block", seeker["id"].as_str().unwrap()),
            Some(&admin_token),
            Some(json!({})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for (method, uri) in [
        ("GET", "/api/profile"),
        ("GET", "/api/applications"),
        ("POST", "/api/applications"),
    ] {
        let body = (method == "POST").then(|| json!({"job_id": "whatever"}));
        let (status, payload) = send(&state, request(method, uri, Some(&seeker_token), body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
        assert_eq!(payload["error"], "Your account has been blocked");
    }

    // Blocking applies regardless of role or approval: an approved employer
    // gets the same rejection once blocked.
    let employer_id = {
        let account = state
            .accounts
            .find_by_email("e@test.dev")
            .await
            .unwrap()
            .unwrap();
        account.id
    };
    send(
        &state,
        request(
            "PUT",
            &format!("/api/admin/users/{employer_id}/block"),
            Some(&admin_token),
            Some(json!({})),
        ),
    )
    .await;

    let (status, payload) = send(
        &state,
        request("GET", "/api/employer/jobs", Some(&employer_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(payload["error"], "Your account has been blocked");
}

#[tokio::test]
async fn blocked_check_precedes_role_and_approval_checks() {
    let state = test_state();
    let admin_token = seed_admin_once(&state).await;

    // Unapproved AND blocked employer: the gate must report blocked, the
    // earlier failure in the pipeline, not pending approval.
    let (employer_token, employer) = register(&state, "E", "pending@test.dev", "employer").await;
    send(
        &state,
        request(
            "PUT",
            &format!("/api/admin/users/{}/block", employer["id"].as_str().unwrap()),
            Some(&admin_token),
            Some(json!({})),
        ),
    )
    .await;

    let (status, body) = send(
        &state,
        request("GET", "/api/employer/jobs", Some(&employer_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Your account has been blocked");
}

#[tokio::test]
async fn unapproved_employer_is_pending_on_approval_gated_operations() {
    let state = test_state();
    let (token, _) = register(&state, "Acme Co", "hr@acme.dev", "employer").await;

    let create = json!({
        "title": "Engineer",
        "company": "Acme Co",
        "location": "Berlin",
        "job_type": "Remote",
        "salary_range": "$90k",
        "description": "Work",
    });

    for (method, uri, body) in [
        ("POST", "/api/jobs", Some(create.clone())),
        ("GET", "/api/employer/jobs", None),
        ("GET", "/api/employer/applicants?job_id=some-id", None),
    ] {
        let (status, payload) = send(&state, request(method, uri, Some(&token), body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
        assert_eq!(
            payload["error"],
            "Your account is pending approval by the admin"
        );
    }
}

#[tokio::test]
async fn approval_check_passes_for_non_employer_roles() {
    let state = test_state();
    let (seeker_token, _) = register(&state, "S", "s2@test.dev", "jobseeker").await;

    // Job seekers never hit the approval gate on their own endpoints.
    let (status, body) = send(
        &state,
        request("GET", "/api/applications", Some(&seeker_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn role_mismatch_is_unauthorized_access() {
    let state = test_state();
    let (seeker_token, _) = register(&state, "S", "s3@test.dev", "jobseeker").await;
    let (employer_token, _) = approved_employer(&state, "E", "e3@test.dev").await;

    // Seeker on an employer endpoint.
    let (status, body) = send(
        &state,
        request("GET", "/api/employer/jobs", Some(&seeker_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Unauthorized access");

    // Employer on a seeker endpoint.
    let (status, body) = send(
        &state,
        request(
            "POST",
            "/api/applications",
            Some(&employer_token),
            Some(json!({"job_id": "x"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Unauthorized access");

    // Neither on the admin surface.
    for token in [&seeker_token, &employer_token] {
        let (status, body) = send(&state, request("GET", "/api/admin/users", Some(token), None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Unauthorized access");
    }
}

#[tokio::test]
async fn delete_posting_skips_the_approval_gate() {
    let state = test_state();
    let (employer_token, _) = approved_employer(&state, "E", "e4@test.dev").await;
    let job = create_job(&state, &employer_token, "Engineer", "Berlin").await;
    let job_id = job["id"].as_str().unwrap();

    // Revoke approval after creation (synthetic moderation state).
    let mut account = state
        .accounts
        .find_by_email("e4@test.dev")
        .await
        .unwrap()
        .unwrap();
    account.is_approved = false;
    state.accounts.update(account).await.unwrap();

    // Update is approval-gated and now fails...
    let (status, body) = send(
        &state,
        request(
            "PUT",
            &format!("/api/jobs/{job_id}"),
            Some(&employer_token),
            Some(json!({"title": "Renamed"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Your account is pending approval by the admin"
    );

    // ...while delete still succeeds: approval gates creation and update,
    // not cleanup.
    let (status, body) = send(
        &state,
        request(
            "DELETE",
            &format!("/api/jobs/{job_id}"),
            Some(&employer_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job deleted");
}

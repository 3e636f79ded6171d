//! Integration tests for the onboarding gate middleware.
//!
//! None of these requests reach the database: they are either redirected by
//! the gate or answered by handlers that only read the session.

mod common;

use axum::body::Body;
use axum::http::header::COOKIE;
use axum::http::{Request, StatusCode};
use common::{
    body_json, complete_metadata, get, get_with_session, incomplete_metadata, location, put_json,
    send, session_token, session_token_expiring_in,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Anonymous visitors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn anonymous_dashboard_redirects_to_sign_in_with_return_url() {
    let response = get(common::build_test_app(), "/dashboard").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&response),
        "/sign-in?redirect_url=http%3A%2F%2Flocalhost%3A3000%2Fdashboard"
    );
}

#[tokio::test]
async fn return_url_keeps_the_query_string() {
    let response = get(common::build_test_app(), "/dashboard?tab=saved").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&response),
        "/sign-in?redirect_url=http%3A%2F%2Flocalhost%3A3000%2Fdashboard%3Ftab%3Dsaved"
    );
}

#[tokio::test]
async fn anonymous_onboarding_api_redirects_to_sign_in() {
    let response = put_json(
        common::build_test_app(),
        "/api/onboarding/platform",
        None,
        json!({ "platform": "X" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(location(&response).starts_with("/sign-in?redirect_url="));
}

#[tokio::test]
async fn invalid_token_counts_as_anonymous() {
    let response = get_with_session(common::build_test_app(), "/dashboard", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(location(&response).starts_with("/sign-in"));
}

#[tokio::test]
async fn expired_token_counts_as_anonymous() {
    let token = session_token_expiring_in(Some(complete_metadata()), -600);
    let response = get_with_session(common::build_test_app(), "/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(location(&response).starts_with("/sign-in"));
}

// ---------------------------------------------------------------------------
// Signed in, onboarding incomplete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn incomplete_user_is_sent_to_onboarding() {
    let token = session_token(Some(incomplete_metadata()));
    let response = get_with_session(common::build_test_app(), "/dashboard", &token).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/onboarding/platform-selection");
}

#[tokio::test]
async fn session_without_metadata_is_incomplete() {
    let token = session_token(None);
    let response = get_with_session(common::build_test_app(), "/dashboard", &token).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/onboarding/platform-selection");
}

#[tokio::test]
async fn unknown_platform_in_metadata_is_incomplete() {
    let token = session_token(Some(json!({
        "is_confirmed": true,
        "platform_preference": "TikTok",
        "opt_in_newsletter": true,
    })));
    let response = get_with_session(common::build_test_app(), "/dashboard", &token).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/onboarding/platform-selection");
}

#[tokio::test]
async fn incomplete_user_may_enter_onboarding() {
    let token = session_token(Some(incomplete_metadata()));
    let response = get_with_session(
        common::build_test_app(),
        "/onboarding/platform-selection",
        &token,
    )
    .await;

    // Not redirected. The page itself is rendered by the frontend.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_platform_in_onboarding_step_is_rejected() {
    let token = session_token(Some(incomplete_metadata()));
    let response = put_json(
        common::build_test_app(),
        "/api/onboarding/platform",
        Some(&token),
        json!({ "platform": "TikTok" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_onboarding_body_is_unprocessable() {
    let token = session_token(Some(incomplete_metadata()));
    let response = put_json(
        common::build_test_app(),
        "/api/onboarding/newsletter",
        Some(&token),
        json!({ "opt_in": "yes please" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Signed in, fully onboarded
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_user_sees_dashboard() {
    let token = session_token(Some(complete_metadata()));
    let response = get_with_session(common::build_test_app(), "/dashboard", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], common::USER_ID);
    assert_eq!(json["data"]["platform_preference"], "LinkedIn");
    assert_eq!(json["data"]["opt_in_newsletter"], false);
    assert_eq!(json["data"]["is_confirmed"], true);
}

#[tokio::test]
async fn session_cookie_is_accepted() {
    let token = session_token(Some(complete_metadata()));
    let request = Request::builder()
        .uri("/dashboard")
        .header(COOKIE, format!("theme=dark; __session={token}"))
        .body(Body::empty())
        .unwrap();
    let response = send(common::build_test_app(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn complete_user_is_bounced_out_of_onboarding() {
    let token = session_token(Some(complete_metadata()));
    let app = common::build_test_app();

    let response = get_with_session(app.clone(), "/onboarding/platform-selection", &token).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/dashboard");

    let response = put_json(
        app,
        "/api/onboarding/newsletter",
        Some(&token),
        json!({ "opt_in": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/dashboard");
}

// ---------------------------------------------------------------------------
// Public routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn public_routes_ignore_the_session() {
    let complete = session_token(Some(complete_metadata()));
    let incomplete = session_token(Some(incomplete_metadata()));

    for token in [None, Some(complete.as_str()), Some(incomplete.as_str())] {
        let app = common::build_test_app();
        let response = match token {
            Some(token) => get_with_session(app, "/robots.txt", token).await,
            None => get(app, "/robots.txt").await,
        };
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn configured_public_route_admits_anonymous_visitor() {
    let response = get(common::build_test_app(), "/about/team").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let mut config = common::test_config();
    config.public_routes.push("/about(.*)".to_string());
    let app = common::build_test_app_with(config);

    // Not a creator page, so the fallback answers 404 without the database.
    let response = get(app.clone(), "/about/team").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn redirects_carry_request_id() {
    let response = get(common::build_test_app(), "/dashboard").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(response.headers().get("x-request-id").is_some());
}

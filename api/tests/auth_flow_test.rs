//! End-to-end tests for the authentication flow: register, login, the JWT
//! gate, and token refresh.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::Utc;
use serde_json::json;

use dh_api::app::create_app;
use dh_core::domain::entities::user::User;

use common::{build_state, send};

#[actix_web::test]
async fn register_login_refresh_round_trip() {
    let (state, token_service) = build_state();
    let app = test::init_service(create_app(state)).await;

    // Register: 201 with a token that opens protected routes.
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "firstname": "A",
            "lastname": "Tester",
            "email": "a@x.com",
            "password": "p1"
        }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    let register_token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"].get("password_hash").is_none());

    // Login: 200 with an access/refresh pair.
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "a@x.com", "password": "p1"}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let access_token = body["accessToken"].as_str().unwrap().to_string();
    let refresh_token = body["refreshToken"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["email"], "a@x.com");

    // Protected route with a live access token: 200.
    for token in [&register_token, &access_token] {
        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
    }

    // Refresh: 200 with a fresh access token that also opens the gate.
    let req = test::TestRequest::post()
        .uri("/users/refresh")
        .set_json(json!({"token": refresh_token}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let new_access = body["accessToken"].as_str().unwrap().to_string();

    let claims = token_service.verify_access_token(&new_access).unwrap();
    assert_eq!(claims.email, "a@x.com");

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", format!("Bearer {}", new_access)))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn missing_token_is_401_and_rejected_token_is_403() {
    let (state, token_service) = build_state();
    let app = test::init_service(create_app(state)).await;

    // No Authorization header at all.
    let req = test::TestRequest::get().uri("/users").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "MISSING_TOKEN");

    // Garbage token.
    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "INVALID_TOKEN");

    // Expired token: distinguished so the client refreshes instead of
    // re-authenticating.
    let user = User {
        id: 1,
        firstname: "A".to_string(),
        lastname: "Tester".to_string(),
        email: "a@x.com".to_string(),
        password_hash: "$2b$04$hash".to_string(),
        role_id: None,
        position_id: None,
        status: None,
        profile_image: None,
        created_at: Utc::now(),
    };
    let expired = token_service
        .issue_access_token_with_ttl(&user, -5)
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", format!("Bearer {}", expired)))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "TOKEN_EXPIRED");
}

#[actix_web::test]
async fn duplicate_registration_is_rejected() {
    let (state, _) = build_state();
    let app = test::init_service(create_app(state)).await;

    let body = json!({
        "firstname": "A",
        "lastname": "Tester",
        "email": "a@x.com",
        "password": "p1"
    });

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(&body)
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(&body)
        .to_request();
    let (status, response) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "DUPLICATE_CREDENTIAL");
}

#[actix_web::test]
async fn bad_credentials_share_one_error_shape() {
    let (state, _) = build_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "firstname": "A",
            "lastname": "Tester",
            "email": "a@x.com",
            "password": "p1"
        }))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "a@x.com", "password": "wrong"}))
        .to_request();
    let (wrong_status, mut wrong_body) = send(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "nobody@x.com", "password": "p1"}))
        .to_request();
    let (unknown_status, mut unknown_body) = send(&app, req).await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);

    // Identical bodies modulo the timestamp: no enumeration signal.
    wrong_body["timestamp"] = serde_json::Value::Null;
    unknown_body["timestamp"] = serde_json::Value::Null;
    assert_eq!(wrong_body, unknown_body);
}

#[actix_web::test]
async fn refresh_rejects_unknown_and_missing_tokens() {
    let (state, _) = build_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/users/refresh")
        .set_json(json!({"token": ""}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "MISSING_TOKEN");

    let req = test::TestRequest::post()
        .uri("/users/refresh")
        .set_json(json!({"token": "never-issued"}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "INVALID_REFRESH_TOKEN");
}

#[actix_web::test]
async fn login_with_missing_fields_is_400() {
    let (state, _) = build_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "a@x.com", "password": ""}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

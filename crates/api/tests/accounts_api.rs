//! HTTP-level integration tests for account creation, login and `/get-user`.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, create_account, get, get_auth, post_json, post_raw};
use notekeep_api::auth::jwt::generate_access_token;
use notekeep_core::types::new_id;
use notekeep_db::models::user::UserResponse;
use notekeep_db::NoteStore;

fn credentials() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Test User",
        "email": "qwerty@uiop.com",
        "password": "qwertyuiop",
    })
}

// ---------------------------------------------------------------------------
// Create account
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_account_returns_user_and_token() {
    let (app, _store) = common::build_test_app();

    let response = post_json(&app, "/create-account", credentials()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["error"], false);
    assert!(json["accessToken"].is_string());
    assert!(json["user"]["_id"].is_string());
    assert_eq!(json["user"]["fullName"], "Test User");
    assert_eq!(json["user"]["email"], "qwerty@uiop.com");
    assert!(json["user"]["createdOn"].is_string());
    assert!(json["user"].get("password").is_none(), "password must not be echoed");
}

#[tokio::test]
async fn create_account_stores_hashed_password() {
    let (app, store) = common::build_test_app();
    post_json(&app, "/create-account", credentials()).await;

    let user = store
        .find_user_by_email("qwerty@uiop.com")
        .await
        .unwrap()
        .expect("user should be persisted");
    assert_ne!(user.password_hash, "qwertyuiop");
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn duplicate_account_is_business_failure() {
    let (app, store) = common::build_test_app();
    post_json(&app, "/create-account", credentials()).await;

    let response = post_json(&app, "/create-account", credentials()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "User already exists");
    assert!(json.get("accessToken").is_none(), "no token for a duplicate");

    assert_eq!(store.user_count().await, 1, "no second record for a duplicate");
}

#[tokio::test]
async fn create_account_requires_each_field() {
    let (app, _store) = common::build_test_app();

    let cases = [
        (serde_json::json!({}), "Full Name is required"),
        (serde_json::json!({ "fullName": "A" }), "Email is required"),
        (
            serde_json::json!({ "fullName": "A", "email": "a@b.c", "password": "" }),
            "Password is required",
        ),
    ];

    for (body, message) in cases {
        let response = post_json(&app, "/create-account", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], true);
        assert_eq!(json["message"], message);
    }
}

#[tokio::test]
async fn create_account_without_content_type_reads_empty_body() {
    let (app, store) = common::build_test_app();
    let response = post_raw(&app, "/create-account", None, None, &credentials().to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "Full Name is required");
    assert_eq!(store.user_count().await, 0);
}

#[tokio::test]
async fn create_account_with_empty_json_body_reports_first_field() {
    let (app, _store) = common::build_test_app();
    let response =
        post_raw(&app, "/create-account", None, Some("application/json"), "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Full Name is required");
}

#[tokio::test]
async fn login_with_malformed_json_is_400_envelope() {
    let (app, _store) = common::build_test_app();
    let response = post_raw(&app, "/login", None, Some("application/json"), "{bad").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert!(json["message"].as_str().unwrap().starts_with("Invalid request body"));
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_success_returns_token() {
    let (app, _store) = common::build_test_app();
    create_account(&app, "Test User", "qwerty@uiop.com", "qwertyuiop").await;

    let body = serde_json::json!({ "email": "qwerty@uiop.com", "password": "qwertyuiop" });
    let response = post_json(&app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["error"], false);
    assert_eq!(json["email"], "qwerty@uiop.com");
    assert_eq!(json["message"], "Login Successful");

    let token = json["accessToken"].as_str().unwrap();
    let me = get_auth(&app, "/get-user", token).await;
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_wrong_password_is_business_failure() {
    let (app, _store) = common::build_test_app();
    create_account(&app, "Test User", "qwerty@uiop.com", "qwertyuiop").await;

    let body = serde_json::json!({ "email": "qwerty@uiop.com", "password": "nope" });
    let response = post_json(&app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "Invalid Credentials");
    assert!(json.get("accessToken").is_none());
}

#[tokio::test]
async fn login_unknown_user_is_business_failure() {
    let (app, _store) = common::build_test_app();

    let body = serde_json::json!({ "email": "ghost@example.com", "password": "x" });
    let response = post_json(&app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "User not found");
}

#[tokio::test]
async fn login_requires_email_and_password() {
    let (app, _store) = common::build_test_app();

    let response = post_json(&app, "/login", serde_json::json!({ "password": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Email is required");

    let response = post_json(&app, "/login", serde_json::json!({ "email": "a@b.c" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Password is required");
}

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_user_returns_redacted_projection() {
    let (app, _store) = common::build_test_app();
    let token = create_account(&app, "Test User", "qwerty@uiop.com", "qwertyuiop").await;

    let response = get_auth(&app, "/get-user", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "");
    assert_eq!(json["user"]["fullName"], "Test User");
    assert_eq!(json["user"]["email"], "qwerty@uiop.com");
    assert!(json["user"]["_id"].is_string());
    assert!(json["user"]["createdOn"].is_string());
    assert!(json["user"].get("password").is_none());
    assert!(json["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn get_user_with_invalid_token_is_401() {
    let (app, _store) = common::build_test_app();

    let response = get_auth(&app, "/get-user", "invalidToken").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn get_user_without_header_is_401() {
    let (app, _store) = common::build_test_app();

    let response = get(&app, "/get-user").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_user_for_vanished_account_is_401() {
    let (app, _store) = common::build_test_app();

    // Validly signed, but the user was never stored.
    let ghost = UserResponse {
        id: new_id(),
        full_name: "Ghost".into(),
        email: "ghost@example.com".into(),
        created_on: chrono::Utc::now(),
    };
    let token = generate_access_token(&ghost, &common::test_config().token).unwrap();

    let response = get_auth(&app, "/get-user", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_401() {
    let (app, _store) = common::build_test_app();
    let token = create_account(&app, "Test User", "qwerty@uiop.com", "qwertyuiop").await;

    let mut other = common::test_config().token;
    other.secret = "a-different-secret".into();
    let claims_user = {
        let response = get_auth(&app, "/get-user", &token).await;
        let json = body_json(response).await;
        serde_json::from_value::<UserResponse>(json["user"].clone()).unwrap()
    };
    let forged = generate_access_token(&claims_user, &other).unwrap();

    let response = get_auth(&app, "/get-user", &forged).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

mod common;

use auth::Role;
use auth::TokenCodec;
use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_then_login() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "identifier": "a@x.com",
            "password": "secret1",
            "role": "viewer"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["role"], "viewer");
    let signup_token = body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "identifier": "a@x.com",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["role"], "viewer");

    // Same subject behind both tokens
    let login_token = body["data"]["token"].as_str().unwrap();
    let first = app.token_codec.verify(&signup_token).unwrap();
    let second = app.token_codec.verify(login_token).unwrap();
    assert_eq!(first.sub, second.sub);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.signup("a@x.com", "secret1", Role::Viewer).await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "identifier": "a@x.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_identifier_is_indistinguishable() {
    let app = TestApp::spawn().await;
    app.signup("a@x.com", "secret1", Role::Viewer).await;

    let known = app
        .post("/api/auth/login")
        .json(&json!({"identifier": "a@x.com", "password": "wrong"}))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown = app
        .post("/api/auth/login")
        .json(&json!({"identifier": "ghost@x.com", "password": "wrong"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(known.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    let known_body: serde_json::Value = known.json().await.unwrap();
    let unknown_body: serde_json::Value = unknown.json().await.unwrap();
    assert_eq!(known_body, unknown_body);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({"identifier": "a@x.com"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_duplicate_identifier() {
    let app = TestApp::spawn().await;
    app.signup("dup@x.com", "secret1", Role::Viewer).await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "identifier": "dup@x.com",
            "password": "secret2",
            "role": "admin"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already in use"));

    // The stored credential is unaffected by the failed call
    let response = app
        .post("/api/auth/login")
        .json(&json!({"identifier": "dup@x.com", "password": "secret1"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["role"], "viewer");
}

#[tokio::test]
async fn test_concurrent_duplicate_signups_resolve_to_one_winner() {
    let app = TestApp::spawn().await;

    let body = json!({
        "identifier": "dup@x.com",
        "password": "secret1",
        "role": "viewer"
    });

    let first = app.post("/api/auth/signup").json(&body).send();
    let second = app.post("/api/auth/signup").json(&body).send();

    let (first, second) = tokio::join!(first, second);
    let statuses = [
        first.expect("Failed to execute request").status(),
        second.expect("Failed to execute request").status(),
    ];

    // The store's unique index picks the winner
    assert!(statuses.contains(&StatusCode::CREATED));
    assert!(statuses.contains(&StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/catalog/weapon")
        .json(&json!({"name": "Excalibur"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_viewer_token_is_forbidden_on_admin_route() {
    let app = TestApp::spawn().await;
    let token = app.signup("viewer@x.com", "secret1", Role::Viewer).await;

    let response = app
        .post("/api/catalog/weapon")
        .bearer_auth(token)
        .json(&json!({"name": "Excalibur"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_token_passes_the_gate() {
    let app = TestApp::spawn().await;
    let token = app.signup("admin@x.com", "secret1", Role::Admin).await;

    let response = app
        .post("/api/catalog/weapon")
        .bearer_auth(token)
        .json(&json!({"name": "Excalibur"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_foreign_secret_token_rejected() {
    let app = TestApp::spawn().await;
    let token = app.signup("admin@x.com", "secret1", Role::Admin).await;
    let subject = app.token_codec.verify(&token).unwrap().sub;

    let foreign_codec = TokenCodec::new(b"some_other_secret_32_bytes_long!!!");
    let forged = foreign_codec
        .issue(&subject, Role::Admin, Duration::hours(1))
        .unwrap();

    let response = app
        .post("/api/catalog/weapon")
        .bearer_auth(forged)
        .json(&json!({"name": "Excalibur"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::spawn().await;
    let token = app.signup("admin@x.com", "secret1", Role::Admin).await;
    let subject = app.token_codec.verify(&token).unwrap().sub;

    let expired = app
        .token_codec
        .issue(&subject, Role::Admin, Duration::seconds(-5))
        .unwrap();

    let response = app
        .post("/api/catalog/weapon")
        .bearer_auth(expired)
        .json(&json!({"name": "Excalibur"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_deleted_subject_rejected() {
    let app = TestApp::spawn().await;
    let token = app.signup("gone@x.com", "secret1", Role::Admin).await;
    let subject = app.token_codec.verify(&token).unwrap().sub;

    sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(uuid::Uuid::parse_str(&subject).unwrap())
        .execute(&app.db.pool)
        .await
        .expect("Failed to delete account");

    let response = app
        .post("/api/catalog/weapon")
        .bearer_auth(token)
        .json(&json!({"name": "Excalibur"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_is_rederived_from_store() {
    let app = TestApp::spawn().await;
    let token = app.signup("demoted@x.com", "secret1", Role::Admin).await;
    let subject = app.token_codec.verify(&token).unwrap().sub;

    // Demote after issuance; the token still claims admin
    sqlx::query("UPDATE accounts SET role = 'viewer' WHERE id = $1")
        .bind(uuid::Uuid::parse_str(&subject).unwrap())
        .execute(&app.db.pool)
        .await
        .expect("Failed to update role");

    let response = app
        .post("/api/catalog/weapon")
        .bearer_auth(token)
        .json(&json!({"name": "Excalibur"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_profile() {
    let app = TestApp::spawn().await;
    let token = app.signup("me@x.com", "secret1", Role::Editor).await;
    let subject = app.token_codec.verify(&token).unwrap().sub;

    let response = app
        .get("/api/auth/profile")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], subject.as_str());
    assert_eq!(body["data"]["identifier"], "me@x.com");
    assert_eq!(body["data"]["role"], "editor");

    // No credential material in the view
    assert!(body["data"].get("password_hash").is_none());
    assert!(!body.to_string().contains("argon2"));
}

#[tokio::test]
async fn test_get_profile_requires_token() {
    let app = TestApp::spawn().await;
    app.signup("me@x.com", "secret1", Role::Viewer).await;

    let response = app
        .get("/api/auth/profile")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_password_reset_flow() {
    let app = TestApp::spawn().await;
    let token = app.signup("reset@x.com", "old_password", Role::Viewer).await;

    let response = app
        .patch("/api/auth/password")
        .bearer_auth(&token)
        .json(&json!({"password": "new_password"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let old_login = app
        .post("/api/auth/login")
        .json(&json!({"identifier": "reset@x.com", "password": "old_password"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(old_login.status(), StatusCode::UNAUTHORIZED);

    let new_login = app
        .post("/api/auth/login")
        .json(&json!({"identifier": "reset@x.com", "password": "new_password"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(new_login.status(), StatusCode::OK);
}

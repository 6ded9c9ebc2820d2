//! Posts API integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{auth_header, create_test_user, send, test_app, unique_email, TestDatabase};

#[tokio::test]
async fn test_create_post_rejections_without_database() {
    let (app, _) = test_app(None);
    let body = json!({"post_title": "Hello", "post_content": "World"});

    let missing = send(&app, Method::POST, "/posts", Some(body.clone()), None).await;
    assert_status!(missing, StatusCode::UNAUTHORIZED);

    let garbage = send(&app, Method::POST, "/posts", Some(body.clone()), Some("Bearer garbage")).await;
    assert_status!(garbage, StatusCode::FORBIDDEN);

    let wrong_scheme = send(&app, Method::POST, "/posts", Some(body), Some("Basic dXNlcjpwYXNz")).await;
    assert_status!(wrong_scheme, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_register_login_and_post_scenario() {
    let db = TestDatabase::new().await;
    let (app, _) = test_app(Some(db.pool().clone()));
    let email = unique_email();

    // Register alice
    let (status, alice) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "alice", "email": email, "password": "pw123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "body: {}", alice);

    // Log in
    let (status, login) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({"email": email, "password": "pw123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {}", login);
    let token = login["token"].as_str().unwrap().to_string();

    // Create a post with the token
    let (status, post) = send(
        &app,
        Method::POST,
        "/posts",
        Some(json!({"post_title": "Hello", "post_content": "First post"})),
        Some(&auth_header(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "body: {}", post);
    assert_eq!(post["user_id"], alice["id"]);
    assert_eq!(post["post_title"], "Hello");

    // The same request with a corrupted token is rejected
    let mut corrupted = token.clone();
    corrupted.pop();
    corrupted.push(if token.ends_with('A') { 'B' } else { 'A' });
    let rejected = send(
        &app,
        Method::POST,
        "/posts",
        Some(json!({"post_title": "Nope", "post_content": "Should not exist"})),
        Some(&auth_header(&corrupted)),
    )
    .await;
    assert_status!(rejected, StatusCode::FORBIDDEN);

    // The post is readable by anyone
    let (status, fetched) = send(
        &app,
        Method::GET,
        &format!("/posts/{}", post["id"].as_str().unwrap()),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, post);

    let (status, all) = send(&app, Method::GET, "/posts", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(all.as_array().unwrap().iter().any(|p| p["id"] == post["id"]));
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_owner_comes_from_token_not_body() {
    let db = TestDatabase::new().await;
    let (app, state) = test_app(Some(db.pool().clone()));
    let author = create_test_user(db.pool(), &state, &unique_email(), "password123").await;

    let (status, post) = send(
        &app,
        Method::POST,
        "/posts",
        Some(json!({
            "post_title": "Mine",
            "post_content": "Owned by the token holder",
            "user_id": uuid::Uuid::new_v4(),
        })),
        Some(&auth_header(&author.token)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(post["user_id"], author.id.to_string());
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_create_post_requires_title_and_content() {
    let db = TestDatabase::new().await;
    let (app, state) = test_app(Some(db.pool().clone()));
    let author = create_test_user(db.pool(), &state, &unique_email(), "password123").await;

    let response = send(
        &app,
        Method::POST,
        "/posts",
        Some(json!({"post_title": "No content"})),
        Some(&auth_header(&author.token)),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_get_missing_post() {
    let db = TestDatabase::new().await;
    let (app, _) = test_app(Some(db.pool().clone()));

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/posts/{}", uuid::Uuid::new_v4()),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post not found");
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_create_post_for_deleted_user() {
    let db = TestDatabase::new().await;
    let (app, state) = test_app(Some(db.pool().clone()));
    let author = create_test_user(db.pool(), &state, &unique_email(), "password123").await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(author.id)
        .execute(db.pool())
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/posts",
        Some(json!({"post_title": "Orphan", "post_content": "No owner left"})),
        Some(&auth_header(&author.token)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

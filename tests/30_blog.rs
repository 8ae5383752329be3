mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn creating_a_post_requires_a_token() {
    let app = common::test_app();

    let res = app.post("/api/blog", None, json!({ "title": "T", "content": "C" })).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body, "Access denied");

    let res = app
        .post("/api/blog", Some("not-a-token"), json!({ "title": "T", "content": "C" }))
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app.get("/api/blog").await;
    assert_eq!(res.json(), json!([]));
}

#[tokio::test]
async fn expired_token_is_treated_like_a_missing_one() {
    let app = common::test_app();
    app.register_and_login("alice", "pw").await;

    let stale = app
        .state
        .tokens
        .issue_at(Uuid::new_v4(), "alice", Utc::now() - Duration::hours(2))
        .unwrap();

    let res = app
        .post("/api/blog", Some(&stale), json!({ "title": "T", "content": "C" }))
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body, "Access denied");
}

#[tokio::test]
async fn created_post_is_listed_with_its_author() {
    let app = common::test_app();
    let token = app.register_and_login("alice", "pw").await;

    let res = app
        .post("/api/blog", Some(&token), json!({ "title": "Hello", "content": "World" }))
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body, "Blog post created");

    let list = app.get("/api/blog").await;
    assert_eq!(list.status, StatusCode::OK);

    let posts = list.json();
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Hello");
    assert_eq!(posts[0]["content"], "World");
    assert_eq!(posts[0]["author"]["username"], "alice");
    assert!(posts[0]["author"].get("password").is_none());
    assert_eq!(posts[0]["comments"], json!([]));
}

#[tokio::test]
async fn post_requires_title_and_content() {
    let app = common::test_app();
    let token = app.register_and_login("alice", "pw").await;

    let res = app.post("/api/blog", Some(&token), json!({ "title": "Only title" })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app.post("/api/blog", Some(&token), json!({ "content": "Only content" })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.get("/api/blog").await.json(), json!([]));
}

#[tokio::test]
async fn comments_on_missing_posts_are_not_found() {
    let app = common::test_app();
    let token = app.register_and_login("alice", "pw").await;
    app.post("/api/blog", Some(&token), json!({ "title": "T", "content": "C" }))
        .await;

    let uri = format!("/api/blog/{}/comment", Uuid::new_v4());
    let res = app.post(&uri, Some(&token), json!({ "content": "hi" })).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "Blog post not found");

    let res = app
        .post("/api/blog/not-a-uuid/comment", Some(&token), json!({ "content": "hi" }))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let posts = app.get("/api/blog").await.json();
    assert_eq!(posts[0]["comments"], json!([]));
}

#[tokio::test]
async fn comments_append_in_order_from_any_user() {
    let app = common::test_app();
    let alice = app.register_and_login("alice", "pw").await;
    let bob = app.register_and_login("bob", "pw").await;

    app.post("/api/blog", Some(&alice), json!({ "title": "T", "content": "C" }))
        .await;
    let posts = app.get("/api/blog").await.json();
    let post_id = posts[0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/blog/{}/comment", post_id);

    let res = app.post(&uri, Some(&bob), json!({ "content": "first" })).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body, "Comment added");

    let res = app.post(&uri, Some(&alice), json!({ "content": "second" })).await;
    assert_eq!(res.status, StatusCode::CREATED);

    let posts = app.get("/api/blog").await.json();
    let comments = posts[0]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "first");
    assert_eq!(comments[0]["commenter"]["username"], "bob");
    assert_eq!(comments[1]["content"], "second");
    assert_eq!(comments[1]["commenter"]["username"], "alice");
}

#[tokio::test]
async fn comment_without_content_is_accepted() {
    let app = common::test_app();
    let token = app.register_and_login("alice", "pw").await;
    app.post("/api/blog", Some(&token), json!({ "title": "T", "content": "C" }))
        .await;
    let post_id = app.get("/api/blog").await.json()[0]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/blog/{}/comment", post_id);
    let res = app.post(&uri, Some(&token), json!({})).await;
    assert_eq!(res.status, StatusCode::CREATED);

    let uri = format!("/api/blog/{}/comment", Uuid::new_v4());
    let res = app.post(&uri, Some(&token), json!({})).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "Blog post not found");

    let posts = app.get("/api/blog").await.json();
    let comments = posts[0]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "");
}

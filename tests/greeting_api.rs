//! End-to-end tests for the greeting service over real TCP.

use std::time::Duration;

use greeter::routing::Greeting;
use reqwest::StatusCode;

mod common;

async fn fetch(path: &str) -> (StatusCode, Greeting) {
    let server = common::start_server().await;
    let res = common::client()
        .get(server.url(path))
        .send()
        .await
        .expect("Server unreachable");
    let status = res.status();
    let body: Greeting = res.json().await.unwrap();
    server.shutdown.trigger();
    (status, body)
}

#[tokio::test]
async fn test_root_greeting() {
    let (status, body) = fetch("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "hi");
}

#[tokio::test]
async fn test_named_greeting() {
    let (status, body) = fetch("/john").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "hello, john!");
}

#[tokio::test]
async fn test_fallback() {
    let (status, body) = fetch("/a/b/c").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "fallback");
}

#[tokio::test]
async fn test_body_shape_is_message_object() {
    let server = common::start_server().await;
    let res = common::client().get(server.url("/")).send().await.unwrap();
    let json: serde_json::Value = res.json().await.unwrap();
    assert_eq!(json, serde_json::json!({ "message": "hi" }));
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_script_like_name_is_plain_json_text() {
    let server = common::start_server().await;
    let res = common::client()
        .get(server.url("/%3Cscript%3Ealert(1)%3C%2Fscript%3E"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body: Greeting = res.json().await.unwrap();
    assert_eq!(body.message, "hello, <script>alert(1)</script>!");
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_post_is_method_not_allowed() {
    let server = common::start_server().await;
    let client = common::client();
    for path in ["/", "/john", "/a/b/c"] {
        let res = client.post(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", path);
    }
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = common::start_server().await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = server.url(&format!("/user{}", i));
        tasks.push(tokio::spawn(async move {
            let body: Greeting = client.get(url).send().await.unwrap().json().await.unwrap();
            (i, body.message)
        }));
    }

    for task in tasks {
        let (i, message) = task.await.unwrap();
        assert_eq!(message, format!("hello, user{}!", i));
    }
    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server().await;
    server.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("Server did not stop");
    assert!(result.unwrap().is_ok());
}

//! Single-value routes over a real socket.

use std::time::{Duration, Instant};

use mono_flux_client::{ClientError, User};
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_delayed_user() {
    let server = common::start_server(Duration::from_millis(200)).await;
    let client = server.client();

    let start = Instant::now();
    let user = client.user(1).await.expect("Server unreachable");

    assert_eq!(
        user,
        User { id: 1, name: "John Doe".into(), email: "john@example.com".into() }
    );
    assert!(start.elapsed() >= Duration::from_millis(200), "Delay should be observable");
}

#[tokio::test]
async fn test_immediate_user() {
    let server = common::start_server(Duration::from_secs(5)).await;
    let client = server.client();

    let start = Instant::now();
    let user = client.user_immediate(2).await.unwrap();

    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Jane Smith");
    assert!(start.elapsed() < Duration::from_secs(5), "Immediate lookup must not wait");
}

#[tokio::test]
async fn test_validated_user() {
    let server = common::start_server(Duration::ZERO).await;
    let client = server.client();

    let user = client.user_validated(5).await.unwrap();
    assert_eq!(user.id, 5);

    match client.user_validated(-5).await {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body.contains("User ID must be positive"));
        }
        other => panic!("Expected a server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_email_and_summary() {
    let server = common::start_server(Duration::ZERO).await;
    let client = server.client();

    assert_eq!(client.user_email(3).await.unwrap(), "john@example.com");
    assert_eq!(
        client.user_summary(3).await.unwrap(),
        "User: John Doe (john@example.com)"
    );
}

#[tokio::test]
async fn test_request_id_echoed() {
    let server = common::start_server(Duration::ZERO).await;
    let res = common::http_client()
        .get(format!("{}/api/mono/user-immediate/1", server.url()))
        .header("x-request-id", "it-works")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "it-works");
}

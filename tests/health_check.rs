//! Integration tests for the health and readiness probes.

mod common;

use common::{questions_fixture, TestApp, TEST_API_KEY};
use mocktest_service::services::providers::mock::MockTextProvider;
use reqwest::Client;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn(MockTextProvider::with_text(questions_fixture(1)), TEST_API_KEY).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "mocktest-service");
}

#[tokio::test]
async fn readiness_reflects_credential_presence() {
    let app = TestApp::spawn(MockTextProvider::with_text(questions_fixture(1)), TEST_API_KEY).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let app = TestApp::spawn(MockTextProvider::with_text(questions_fixture(1)), "").await;
    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 503);
}

//! Test helper module for mocktest-service integration tests.

#![allow(dead_code)]

use mocktest_service::config::{GoogleConfig, ModelConfig, ServerConfig, ServiceConfig};
use mocktest_service::services::providers::mock::MockTextProvider;
use mocktest_service::startup::Application;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    /// Spawn the app on a random port with the given mock provider and
    /// API key. Config is built directly rather than via environment
    /// variables so parallel tests cannot race on process state.
    pub async fn spawn(provider: MockTextProvider, api_key: &str) -> Self {
        let config = ServiceConfig {
            server: ServerConfig { port: 0 },
            models: ModelConfig {
                text_model: "gemini-2.5-flash".to_string(),
            },
            google: GoogleConfig {
                api_key: api_key.to_string(),
            },
        };

        let provider = Arc::new(provider);
        let app = Application::build_with_provider(config, provider.clone())
            .await
            .expect("Failed to build application");

        let port = app.port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        Self {
            address: format!("http://localhost:{}", port),
            port,
            provider,
        }
    }
}

/// A provider payload of `n` well-formed questions, as the JSON text
/// Gemini would return for the declared response schema.
pub fn questions_fixture(n: usize) -> String {
    let questions: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "question": format!("Question {}: what is {} + {}?", i + 1, i, i),
                "options": [
                    (2 * i).to_string(),
                    (2 * i + 1).to_string(),
                    (2 * i + 2).to_string(),
                    (2 * i + 3).to_string(),
                ],
                "correctAnswer": (2 * i).to_string(),
            })
        })
        .collect();

    serde_json::to_string(&questions).unwrap()
}

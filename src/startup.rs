//! Application startup and lifecycle management.

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers::generate::generate_mock_test;
use crate::handlers::health::{health_check, readiness_check};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Build the service router.
///
/// `/generate-test` accepts POST only; axum's method router answers any
/// other method with 405 and an empty body before the handler runs.
/// CORS is permissive because the endpoint is consumed by a browser
/// frontend on another origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-test", post(generate_mock_test))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the Gemini provider.
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.models.text_model,
            api_key_configured = config.google.is_configured(),
            "Initialized Gemini text provider"
        );

        Self::build_with_provider(config, text_provider).await
    }

    /// Build the application with an injected provider (used by tests).
    pub async fn build_with_provider(
        config: ServiceConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        // Port 0 = random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;
        let port = listener
            .local_addr()
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?
            .port();

        tracing::info!("Mock test service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, router(self.state)).await
    }

    /// Run the application until the given shutdown future resolves.
    pub async fn run_until_shutdown(
        self,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> std::io::Result<()> {
        axum::serve(self.listener, router(self.state))
            .with_graceful_shutdown(shutdown)
            .await
    }
}

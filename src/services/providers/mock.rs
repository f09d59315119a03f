//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock should do when invoked.
enum MockBehavior {
    Respond(String),
    Fail(String),
}

/// Mock text provider for testing.
///
/// Returns a canned text payload (or a canned failure) and counts
/// invocations so tests can assert that no provider call was made.
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockTextProvider {
    /// Mock that answers every call with the given text payload.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Respond(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that fails every call with an API error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Fail(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of generate() calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Respond(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            MockBehavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}

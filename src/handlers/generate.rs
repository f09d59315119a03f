//! The mock test generation endpoint.
//!
//! A single linear relay: credential gate, request decode, prompt and
//! schema construction, one provider call, payload decode, respond.
//! No retries and no partial results; every failure surfaces as a 500
//! with a `message` body via [`AppError`].

use crate::error::AppError;
use crate::models::{GenerateTestRequest, MockQuestion};
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde_json::json;

/// Handle `POST /generate-test`.
///
/// The body is taken as raw bytes and decoded explicitly so that the
/// credential check runs before any parse work, and so that a decode
/// failure maps to the endpoint's own error body rather than an
/// extractor rejection.
pub async fn generate_mock_test(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<MockQuestion>>, AppError> {
    if !state.config.google.is_configured() {
        return Err(AppError::ApiKeyMissing);
    }

    let request: GenerateTestRequest =
        serde_json::from_slice(&body).map_err(AppError::MalformedRequest)?;

    tracing::info!(
        subject = %request.subject,
        number_of_questions = request.number_of_questions,
        "Generating mock test"
    );

    let prompt = build_prompt(&request);
    let params = GenerationParams {
        output_schema: Some(response_schema()),
        ..Default::default()
    };

    let response = state.text_provider.generate(&prompt, &params).await?;
    let payload = response.text.ok_or(AppError::EmptyProviderResponse)?;

    let questions: Vec<MockQuestion> =
        serde_json::from_str(&payload).map_err(AppError::MalformedProviderPayload)?;

    tracing::info!(
        question_count = questions.len(),
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Mock test generated"
    );

    Ok(Json(questions))
}

/// Build the generation prompt, embedding subject and count verbatim.
fn build_prompt(request: &GenerateTestRequest) -> String {
    format!(
        "Generate a {count}-question mock test for a Nigerian student preparing for the JAMB/WAEC exam in {subject}.\n\
         The questions should cover various topics within the Nigerian secondary school syllabus for {subject}.\n\
         Each question must be multiple-choice with 4 options.\n\
         Use Nigerian context and examples where appropriate (e.g., using Naira, local names, places).",
        count = request.number_of_questions,
        subject = request.subject,
    )
}

/// The structured-output schema declared to the provider: an array of
/// question objects, each with 4 options and the correct answer's text.
fn response_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": {
                    "type": "STRING",
                    "description": "The question text.",
                },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "An array of 4 multiple-choice options.",
                },
                "correctAnswer": {
                    "type": "STRING",
                    "description": "The full text of the correct option.",
                },
            },
            "required": ["question", "options", "correctAnswer"],
        },
    })
}

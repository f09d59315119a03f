//! Wire shapes for the mock test endpoint.
//!
//! Both shapes live for a single request; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Inbound generation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestRequest {
    pub subject: String,
    pub number_of_questions: u32,
}

/// One multiple-choice question as returned by the provider.
///
/// The provider is told to emit exactly 4 options with `correct_answer`
/// matching one of them; that contract is declared via the response
/// schema and trusted, not re-validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

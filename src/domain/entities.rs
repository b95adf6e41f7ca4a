//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here — adapters map into these.

use serde::{Deserialize, Serialize};

/// Speaker of a message in a completion exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One entry of the exchange sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single form submission. Discarded once its response is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub persona: super::PersonaKind,
    pub question: String,
}

impl ConsultationRequest {
    pub fn new(persona: super::PersonaKind, question: impl Into<String>) -> Self {
        Self {
            persona,
            question: question.into(),
        }
    }
}

/// Text to show the user. `is_error` is set when the remote call failed and
/// `response_text` carries the formatted error instead of an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationResponse {
    pub response_text: String,
    pub is_error: bool,
}

impl ConsultationResponse {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            response_text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            response_text: text.into(),
            is_error: true,
        }
    }
}

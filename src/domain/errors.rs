//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("質問内容を入力してください。")]
    EmptyQuestion,

    #[error("API key is not configured (set OPENAI_API_KEY or EXPERT_CONSULT_API_KEY)")]
    MissingCredential,

    /// Remote completion failure. Displays the bare message so it can be shown verbatim.
    #[error("{0}")]
    Completion(String),

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Terminal prompt failed: {0}")]
    Ui(String),
}

//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatMessage, DomainError};

/// Remote text-generation service.
#[async_trait::async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send the ordered exchange and return the generated text unmodified.
    ///
    /// One call, no retries. Every failure (credential, transport, provider,
    /// malformed payload) is reported as a `DomainError`.
    async fn complete(&self, exchange: &[ChatMessage]) -> Result<String, DomainError>;
}

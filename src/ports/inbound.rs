//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive front end drives consultations.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the consultation form until the user leaves.
    async fn run(&self) -> Result<(), DomainError>;
}

//! Mock completion adapter for testing without API calls.
//!
//! Returns a scripted reply (or failure) and records every exchange it receives.

use crate::domain::{ChatMessage, DomainError};
use crate::ports::CompletionPort;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Mock completion adapter.
pub struct MockCompletionAdapter {
    outcome: Result<String, DomainError>,
    calls: AtomicUsize,
    last_exchange: Mutex<Option<Vec<ChatMessage>>>,
}

impl MockCompletionAdapter {
    /// Adapter that answers every request with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_outcome(Ok(reply.into()))
    }

    /// Adapter that fails every request with `error`.
    pub fn failing(error: DomainError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<String, DomainError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_exchange: Mutex::new(None),
        }
    }

    /// Number of `complete` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The exchange passed to the most recent call.
    pub fn last_exchange(&self) -> Option<Vec<ChatMessage>> {
        self.last_exchange
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl CompletionPort for MockCompletionAdapter {
    async fn complete(&self, exchange: &[ChatMessage]) -> Result<String, DomainError> {
        info!(messages = exchange.len(), "[MOCK] Simulating completion");

        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_exchange.lock() {
            *guard = Some(exchange.to_vec());
        }

        self.outcome.clone()
    }
}

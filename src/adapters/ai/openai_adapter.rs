//! OpenAI-compatible adapter for expert consultations.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `CompletionPort`.

use crate::domain::{ChatMessage, DomainError};
use crate::ports::CompletionPort;
use crate::shared::config::AppConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sampling temperature for every consultation.
pub const TEMPERATURE: f32 = 0.7;

/// OpenAI-compatible completion adapter.
///
/// Holds the configuration rather than a resolved key: the credential is read
/// on each call, so a missing key fails the request instead of startup.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    config: Arc<AppConfig>,
}

impl OpenAiAdapter {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Pull a readable message out of a provider error body.
    ///
    /// OpenAI-style bodies look like `{"error": {"message": "..."}}`; anything
    /// else is passed through, capped at 200 chars.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.chars().take(200).collect())
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: String,
    messages: &'a [ChatMessage],
    temperature: f32,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait::async_trait]
impl CompletionPort for OpenAiAdapter {
    async fn complete(&self, exchange: &[ChatMessage]) -> Result<String, DomainError> {
        let api_key = self.config.api_key().ok_or(DomainError::MissingCredential)?;
        let model = self.config.model_or_default();
        let url = self.config.api_url_or_default();

        info!(
            model = %model,
            messages = exchange.len(),
            chars = exchange.iter().map(|m| m.content.len()).sum::<usize>(),
            "sending consultation to completion API"
        );

        let request = ChatRequest {
            model,
            messages: exchange,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Completion(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "completion API returned error");
            return Err(DomainError::Completion(format!(
                "API error {}: {}",
                status,
                Self::error_message(&text)
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Completion(format!("Failed to parse API response: {}", e)))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::Completion("No response choices returned".to_string()))?;

        debug!(response_len = content.len(), "received completion");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{ENV_LOCK, set_api_key_env};
    use mockito::Matcher;

    fn adapter_for(server: &mockito::ServerGuard, api_key: Option<&str>) -> OpenAiAdapter {
        OpenAiAdapter::new(Arc::new(AppConfig {
            api_key: api_key.map(str::to_string),
            api_url: Some(format!("{}/v1/chat/completions", server.url())),
            model: None,
        }))
    }

    fn exchange() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You are a doctor."),
            ChatMessage::user("  What causes headaches?\n"),
        ]
    }

    #[tokio::test]
    async fn test_complete_sends_model_temperature_and_messages() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "temperature": 0.7,
                "messages": [
                    {"role": "system", "content": "You are a doctor."},
                    {"role": "user", "content": "  What causes headaches?\n"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  Dehydration.\n"}}]}"#)
            .expect(1)
            .create_async()
            .await;

        let adapter = adapter_for(&server, Some("sk-test"));
        let text = adapter.complete(&exchange()).await.unwrap();

        assert_eq!(text, "  Dehydration.\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_provider_error_message_is_extracted() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body(r#"{"error":{"message":"rate limit exceeded","type":"requests"}}"#)
            .create_async()
            .await;

        let adapter = adapter_for(&server, Some("sk-test"));
        let err = adapter.complete(&exchange()).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::Completion("API error 429 Too Many Requests: rate limit exceeded".into())
        );
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_passed_through() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_body("upstream down")
            .create_async()
            .await;

        let adapter = adapter_for(&server, Some("sk-test"));
        let err = adapter.complete(&exchange()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "API error 500 Internal Server Error: upstream down"
        );
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let adapter = adapter_for(&server, Some("sk-test"));
        let err = adapter.complete(&exchange()).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::Completion("No response choices returned".into())
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let adapter = adapter_for(&server, Some("sk-test"));
        let err = adapter.complete(&exchange()).await.unwrap_err();

        assert!(err.to_string().starts_with("Failed to parse API response"));
    }

    #[tokio::test]
    async fn test_blank_key_fails_without_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let _env = ENV_LOCK.lock().await;
        set_api_key_env(None);
        let adapter = adapter_for(&server, Some("   "));
        let err = adapter.complete(&exchange()).await.unwrap_err();

        assert_eq!(err, DomainError::MissingCredential);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_key_from_env_is_read_at_call_time() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-from-env")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .expect(1)
            .create_async()
            .await;

        let _env = ENV_LOCK.lock().await;
        set_api_key_env(None);
        let adapter = adapter_for(&server, None);
        set_api_key_env(Some("sk-from-env"));

        let result = adapter.complete(&exchange()).await;
        set_api_key_env(None);

        assert_eq!(result.unwrap(), "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unset_env_key_is_missing_credential() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let _env = ENV_LOCK.lock().await;
        set_api_key_env(None);
        let adapter = adapter_for(&server, None);
        let err = adapter.complete(&exchange()).await.unwrap_err();

        assert_eq!(err, DomainError::MissingCredential);
        mock.assert_async().await;
    }

    #[test]
    fn test_error_message_truncates_plain_bodies() {
        let body = "x".repeat(500);
        assert_eq!(OpenAiAdapter::error_message(&body).len(), 200);
    }
}

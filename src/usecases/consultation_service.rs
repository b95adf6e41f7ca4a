//! Consultation service. Turns a question and persona into a displayable answer.
//!
//! Resolves the persona prompt, sends one exchange through the completion port,
//! and folds any failure into an error response so callers never see `Err`
//! from a remote problem.

use crate::domain::{
    ChatMessage, ConsultationRequest, ConsultationResponse, DomainError, PersonaKind, resolve,
};
use crate::ports::CompletionPort;
use std::sync::Arc;
use tracing::{info, warn};

/// Prefix of every error shown in place of an answer.
pub const ERROR_PREFIX: &str = "エラーが発生しました: ";

/// Build the two-entry exchange: persona prompt first, the question verbatim second.
pub fn build_exchange(question: &str, persona: PersonaKind) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(resolve(persona).as_str()),
        ChatMessage::user(question),
    ]
}

pub struct ConsultationService {
    completion: Arc<dyn CompletionPort>,
}

impl ConsultationService {
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self { completion }
    }

    /// Ask `persona` the `question`. No validation here; see [`Self::consult`].
    pub async fn get_response(&self, question: &str, persona: PersonaKind) -> ConsultationResponse {
        let exchange = build_exchange(question, persona);
        info!(persona = persona.id(), "requesting consultation");

        match self.completion.complete(&exchange).await {
            Ok(text) => ConsultationResponse::answer(text),
            Err(e) => {
                warn!(persona = persona.id(), error = %e, "consultation failed");
                ConsultationResponse::error(format!("{}{}", ERROR_PREFIX, e))
            }
        }
    }

    /// Validate and run a submission.
    ///
    /// A blank (whitespace-only) question is rejected with
    /// `DomainError::EmptyQuestion` before any remote call. The question is
    /// otherwise forwarded untrimmed.
    pub async fn consult(
        &self,
        request: &ConsultationRequest,
    ) -> Result<ConsultationResponse, DomainError> {
        if request.question.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        Ok(self.get_response(&request.question, request.persona).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockCompletionAdapter;
    use crate::domain::Role;

    fn service_with(mock: &Arc<MockCompletionAdapter>) -> ConsultationService {
        ConsultationService::new(Arc::clone(mock) as Arc<dyn CompletionPort>)
    }

    #[test]
    fn test_exchange_keeps_question_verbatim() {
        let exchange = build_exchange("What causes headaches?", PersonaKind::MedicalExpert);

        assert_eq!(exchange.len(), 2);
        assert_eq!(exchange[0].role, Role::System);
        assert_eq!(
            exchange[0].content,
            resolve(PersonaKind::MedicalExpert).as_str()
        );
        assert_eq!(exchange[1].role, Role::User);
        assert_eq!(exchange[1].content, "What causes headaches?");

        let raw = "  <b>\"quoted\"</b>\n\n";
        assert_eq!(build_exchange(raw, PersonaKind::LegalExpert)[1].content, raw);
    }

    #[tokio::test]
    async fn test_remote_failure_becomes_error_response() {
        let mock = Arc::new(MockCompletionAdapter::failing(DomainError::Completion(
            "rate limit exceeded".into(),
        )));
        let service = service_with(&mock);

        let response = service
            .get_response("What causes headaches?", PersonaKind::MedicalExpert)
            .await;

        assert_eq!(
            response,
            ConsultationResponse {
                response_text: "エラーが発生しました: rate limit exceeded".into(),
                is_error: true,
            }
        );
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_credential_becomes_error_response() {
        let mock = Arc::new(MockCompletionAdapter::failing(DomainError::MissingCredential));
        let service = service_with(&mock);

        let response = service.get_response("q", PersonaKind::LegalExpert).await;

        assert!(response.is_error);
        assert!(response.response_text.starts_with(ERROR_PREFIX));
    }

    #[tokio::test]
    async fn test_blank_question_never_reaches_port() {
        let mock = Arc::new(MockCompletionAdapter::replying("unused"));
        let service = service_with(&mock);

        for question in ["", "   ", "\n\t  \n"] {
            let request = ConsultationRequest::new(PersonaKind::MedicalExpert, question);
            let result = service.consult(&request).await;
            assert_eq!(result, Err(DomainError::EmptyQuestion));
        }
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_answer_is_returned_verbatim() {
        let mock = Arc::new(MockCompletionAdapter::replying(
            "Use iterative pointer swapping...",
        ));
        let service = service_with(&mock);
        let request = ConsultationRequest::new(
            PersonaKind::SoftwareEngineer,
            "How do I reverse a linked list?",
        );

        let response = service.consult(&request).await.unwrap();

        assert!(!response.is_error);
        assert_eq!(response.response_text, "Use iterative pointer swapping...");
        let sent = mock.last_exchange().unwrap();
        assert_eq!(
            sent,
            build_exchange(
                "How do I reverse a linked list?",
                PersonaKind::SoftwareEngineer
            )
        );
    }

    #[tokio::test]
    async fn test_padded_question_is_forwarded_untrimmed() {
        let mock = Arc::new(MockCompletionAdapter::replying("ok"));
        let service = service_with(&mock);
        let request = ConsultationRequest::new(PersonaKind::LegalExpert, "  契約とは？ \n");

        service.consult(&request).await.unwrap();

        assert_eq!(mock.last_exchange().unwrap()[1].content, "  契約とは？ \n");
    }
}

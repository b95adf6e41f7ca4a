//! Implements InputPort. Inquire-based consultation form.
//!
//! Persona select -> question -> spinner -> answer, repeated until the user stops.

use super::progress;
use crate::domain::{ConsultationRequest, ConsultationResponse, DomainError, PersonaKind};
use crate::ports::InputPort;
use crate::usecases::ConsultationService;
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use indicatif::ProgressBar;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, InquireError, Select, Text};
use std::io::{Write, stdout};
use std::sync::Arc;
use tracing::debug;

const PERSONA_PROMPT: &str = "👨‍⚕️ 相談したい専門家を選んでください：";
const QUESTION_PROMPT: &str = "💬 ここに質問や相談内容を入力してください：";
const QUESTION_PLACEHOLDER: &str = "例：最近頭痛が続いているのですが、どのような原因が考えられますか？";
const ANSWER_HEADING: &str = "💡 AI専門家からの回答";
const ANSWER_CAPTION: &str = "⚠️ この回答は参考情報です。重要な判断は必ず専門家にご相談ください。";
const CONTINUE_PROMPT: &str = "続けて相談しますか？";

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("❯").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// Text block shown for a finished consultation. The response text is
/// embedded unchanged.
pub fn format_answer(persona: PersonaKind, response: &ConsultationResponse) -> String {
    format!(
        "{rule}\n{ANSWER_HEADING}\n{label}より：\n\n{body}\n\n{rule}\n{ANSWER_CAPTION}\n",
        rule = "-".repeat(40),
        label = persona.label(),
        body = response.response_text,
    )
}

/// Busy indicator for a submission. Blank questions are rejected without a
/// remote call, so they get none.
fn spinner_for(request: &ConsultationRequest) -> Option<ProgressBar> {
    if request.question.trim().is_empty() {
        return None;
    }
    Some(progress::spinner(request.persona))
}

/// `Ok(None)` when the user cancelled (Esc / Ctrl-C).
fn prompt_result<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn print_colored(text: &str, color: TermColor) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(ResetColor);
    let _ = out.execute(Print("\n"));
    let _ = out.flush();
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<ConsultationService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<ConsultationService>) -> Self {
        Self { service }
    }

    /// One form submission. `Ok(false)` when the user cancelled a prompt.
    async fn consult_once(&self) -> Result<bool, DomainError> {
        let Some(persona) = prompt_result(
            Select::new(PERSONA_PROMPT, PersonaKind::ALL.to_vec())
                .with_starting_cursor(0)
                .prompt(),
        )?
        else {
            return Ok(false);
        };
        print_colored(persona.description(), TermColor::Cyan);

        let Some(question) = prompt_result(
            Text::new(QUESTION_PROMPT)
                .with_placeholder(QUESTION_PLACEHOLDER)
                .prompt(),
        )?
        else {
            return Ok(false);
        };

        let request = ConsultationRequest::new(persona, question);
        let spinner = spinner_for(&request);
        let outcome = self.service.consult(&request).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            Ok(response) => {
                let color = if response.is_error {
                    TermColor::Red
                } else {
                    TermColor::Reset
                };
                print_colored(&format_answer(persona, &response), color);
            }
            Err(e @ DomainError::EmptyQuestion) => {
                debug!("blank question rejected");
                print_colored(&e.to_string(), TermColor::Red);
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            if !self.consult_once().await? {
                return Ok(());
            }
            let again = prompt_result(Confirm::new(CONTINUE_PROMPT).with_default(true).prompt())?;
            if again != Some(true) {
                return Ok(());
            }
        }
    }
}

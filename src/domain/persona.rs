//! Expert personas and their system prompts.
//!
//! The persona set is closed: adding one means adding a variant and its arms
//! below, and the compiler flags any missing case.

use super::DomainError;
use std::fmt;
use std::str::FromStr;

/// The expert role a user consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PersonaKind {
    #[default]
    MedicalExpert,
    LegalExpert,
    SoftwareEngineer,
}

/// Fixed instruction text sent as the system message for a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemPrompt(&'static str);

impl SystemPrompt {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SystemPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const MEDICAL_PROMPT: &str = "あなたは経験豊富な医療専門家です。
健康や医療に関する質問に、専門的で分かりやすい回答をしてください。
ただし、診断や治療の決定は医師の判断が必要であることを必ず伝えてください。";

const LEGAL_PROMPT: &str = "あなたは経験豊富な法律専門家です。
法律や契約、権利に関する質問に、専門的で分かりやすい回答をしてください。
ただし、具体的な法的判断は弁護士などの専門家に相談することを推奨してください。";

const SOFTWARE_PROMPT: &str = "あなたは経験豊富なITエンジニアです。
プログラミング、システム設計、技術的な問題に関して、実践的で分かりやすい回答をしてください。
コード例や具体的な解決策を含めて説明してください。";

/// Resolve the system prompt for a persona. Total and pure.
pub fn resolve(persona: PersonaKind) -> SystemPrompt {
    match persona {
        PersonaKind::MedicalExpert => SystemPrompt(MEDICAL_PROMPT),
        PersonaKind::LegalExpert => SystemPrompt(LEGAL_PROMPT),
        PersonaKind::SoftwareEngineer => SystemPrompt(SOFTWARE_PROMPT),
    }
}

impl PersonaKind {
    /// All personas in display order. The first one is the default selection.
    pub const ALL: [PersonaKind; 3] = [
        PersonaKind::MedicalExpert,
        PersonaKind::LegalExpert,
        PersonaKind::SoftwareEngineer,
    ];

    /// Label shown in the selection list and above answers.
    pub fn label(self) -> &'static str {
        match self {
            PersonaKind::MedicalExpert => "医療専門家",
            PersonaKind::LegalExpert => "法律専門家",
            PersonaKind::SoftwareEngineer => "ITエンジニア",
        }
    }

    /// One-line summary of what the persona answers.
    pub fn description(self) -> &'static str {
        match self {
            PersonaKind::MedicalExpert => "🏥 健康、症状、医療に関する一般的な情報をお答えします。",
            PersonaKind::LegalExpert => "⚖️ 法律、契約、権利に関する一般的な情報をお答えします。",
            PersonaKind::SoftwareEngineer => {
                "💻 プログラミング、システム、技術に関する質問にお答えします。"
            }
        }
    }

    /// Stable ASCII identifier (kebab-case).
    pub fn id(self) -> &'static str {
        match self {
            PersonaKind::MedicalExpert => "medical-expert",
            PersonaKind::LegalExpert => "legal-expert",
            PersonaKind::SoftwareEngineer => "software-engineer",
        }
    }

    pub fn system_prompt(self) -> SystemPrompt {
        resolve(self)
    }
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PersonaKind {
    type Err = DomainError;

    /// Accepts either the display label or the kebab-case id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PersonaKind::ALL
            .into_iter()
            .find(|p| p.label() == s || p.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownPersona(s.to_string()))
    }
}

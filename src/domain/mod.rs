//! Core domain layer. No external I/O dependencies.
//!
//! Personas, prompts and consultation values live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod persona;

pub use entities::{ChatMessage, ConsultationRequest, ConsultationResponse, Role};
pub use errors::DomainError;
pub use persona::{PersonaKind, SystemPrompt, resolve};

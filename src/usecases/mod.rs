//! Application use cases. Orchestrate domain logic via ports.

pub mod consultation_service;

pub use consultation_service::{ConsultationService, ERROR_PREFIX, build_exchange};

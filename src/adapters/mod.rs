//! Infrastructure adapters. Implement ports.
//!
//! Completion API and terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;

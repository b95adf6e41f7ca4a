//! Busy indicator shown while a consultation is in flight.

use crate::domain::PersonaKind;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn waiting_message(persona: PersonaKind) -> String {
    format!("{}が回答を準備中...", persona.label())
}

/// Start a ticking spinner. Caller clears it with `finish_and_clear`.
pub fn spinner(persona: PersonaKind) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(waiting_message(persona));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

//! Formatting utilities for terminal output

use crate::core::{AttributeFeedback, Entry};

/// Text for one guess-table cell: the guessed value plus the hint arrow
/// when a numeric attribute misses
#[must_use]
pub fn cell_text(entry: &Entry, feedback: AttributeFeedback) -> String {
    let value = entry.display_value(feedback.attribute);
    match feedback.direction {
        Some(direction) => format!("{value} {}", direction.arrow()),
        None => value,
    }
}

/// Pad or truncate to a fixed display width (by chars)
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        format!("{text}{}", " ".repeat(width - count))
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Formatting utilities for terminal output

/// Spread a scramble out so each letter reads on its own
#[must_use]
pub fn spaced(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value.saturating_mul(width) / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Session progress as a bar with a count, e.g. `[███░░] 3/5`
#[must_use]
pub fn word_progress(count: usize, max: usize, width: usize) -> String {
    format!("[{}] {count}/{max}", create_progress_bar(count, max, width))
}

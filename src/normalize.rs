//! Input normalization for raw cancellation-reason text.
//!
//! The dashboard hands us one free-text blob, one reason per line. We split,
//! trim, and drop blank lines. Duplicates are kept on purpose: a reason that
//! appears three times is a frequency signal the model should see three times.

/// Split raw multi-line text into an ordered reason sequence.
///
/// Order is preserved from the input; an empty or all-whitespace input yields
/// an empty vector, never an error.
pub fn normalize_reasons(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

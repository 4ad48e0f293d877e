use crate::error::{ProjectorError, Result};

/// The column coerced to a strict boolean before the table is written.
pub const GOLDEN_COLUMN: &str = "_golden";

/// Interpret a raw cell value as a boolean.
///
/// Accepted forms, after trimming whitespace:
/// - case-insensitive `true` / `false` (covers `TRUE`/`FALSE` in the
///   annotation export and `True`/`False` written by a previous run);
/// - an integer literal, where zero is false and anything non-zero is true.
///
/// Anything else, the empty string included, is a coercion error carrying the
/// zero-based data-row index and the raw value.
pub fn parse_bool(row: usize, raw: &str) -> Result<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Ok(false);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n != 0);
    }
    Err(ProjectorError::Coercion {
        row,
        value: raw.to_string(),
    })
}

/// Serialize a coerced boolean as the literal the visualization consumes.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

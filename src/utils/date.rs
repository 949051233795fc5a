//! Date utilities: normalizing loosely-formatted date input to "YYYY-MM-DD".

use crate::errors::{AppError, AppResult};

/// Normalize a user-typed date to "YYYY-MM-DD".
///
/// Accepts `-` or `/` as the field separator and zero-pads month and day.
/// The year is passed through unpadded. Fails when the input does not split
/// into exactly three components.
///
/// Note: this is a best-effort reformat, not a calendar check; the strict
/// check happens when the composed timestamp is validated.
pub fn normalize_date(s: &str) -> AppResult<String> {
    let normalized = s.replace('/', "-");
    let parts: Vec<&str> = normalized.split('-').collect();

    if parts.len() != 3 {
        return Err(AppError::InvalidDate(s.to_string()));
    }

    Ok(format!("{}-{:0>2}-{:0>2}", parts[0], parts[1], parts[2]))
}

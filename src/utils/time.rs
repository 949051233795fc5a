//! Time utilities: separator normalization, "HH:MM:SS" reformatting, and
//! strict canonical timestamp validation.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Canonical timestamp pattern used for both storage and validation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Replace the full-width colon (typed by CJK input methods) with the
/// ASCII colon.
pub fn normalize_separator(s: &str) -> String {
    s.replace('：', ":")
}

/// Normalize a user-typed time to "HH:MM:SS".
///
/// Applies `normalize_separator` and zero-pads each component, so "9：0：0"
/// becomes "09:00:00". Fails when the input does not split into exactly
/// three components (a missing seconds field is rejected here).
pub fn normalize_time(s: &str) -> AppResult<String> {
    let normalized = normalize_separator(s);
    let parts: Vec<&str> = normalized.split(':').collect();

    if parts.len() != 3 {
        return Err(AppError::InvalidTime(s.to_string()));
    }

    Ok(format!("{:0>2}:{:0>2}:{:0>2}", parts[0], parts[1], parts[2]))
}

/// True iff `s` parses exactly as "YYYY-MM-DDTHH:MM:SS": no extra
/// characters, valid calendar ranges, no timezone suffix.
pub fn is_valid_timestamp(s: &str) -> bool {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).is_ok()
}

/// Join a normalized date and time into the canonical timestamp form.
pub fn compose_timestamp(date: &str, time: &str) -> String {
    format!("{}T{}", date, time)
}

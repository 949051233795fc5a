//! Record validation: turn raw user text into a canonical ExamRecord or
//! reject it with a specific reason.
//!
//! Validation is split into a best-effort normalize step followed by a
//! strict parse check, so liberal input ("2024/1/5", "9:0:0") is accepted
//! while structurally invalid input is rejected.

use crate::errors::{AppError, AppResult};
use crate::models::ExamRecord;
use crate::utils::date::normalize_date;
use crate::utils::time::{compose_timestamp, is_valid_timestamp, normalize_time};

pub struct RecordLogic;

impl RecordLogic {
    /// Build a validated record from the four raw input fields.
    ///
    /// - any field empty after trimming → `EmptyField`
    /// - date not reformattable to "YYYY-MM-DD" → `InvalidDate`
    /// - composed start/end failing the strict timestamp parse → `InvalidTime`
    pub fn build(name: &str, date: &str, start: &str, end: &str) -> AppResult<ExamRecord> {
        let name = name.trim();
        let date = date.trim();
        let start = start.trim();
        let end = end.trim();

        if name.is_empty() || date.is_empty() || start.is_empty() || end.is_empty() {
            return Err(AppError::EmptyField);
        }

        let date = normalize_date(date)?;

        let start_ts = compose_timestamp(&date, &normalize_time(start)?);
        let end_ts = compose_timestamp(&date, &normalize_time(end)?);

        if !is_valid_timestamp(&start_ts) {
            return Err(AppError::InvalidTime(start.to_string()));
        }
        if !is_valid_timestamp(&end_ts) {
            return Err(AppError::InvalidTime(end.to_string()));
        }

        Ok(ExamRecord::new(name.to_string(), start_ts, end_ts))
    }
}

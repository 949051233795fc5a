mod fs_utils;
mod json;

pub use fs_utils::ensure_writable;
pub use json::{read_document, write_document};

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for export-style writes.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

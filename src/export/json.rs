use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::BoardDocument;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a board document as pretty-printed JSON.
///
/// serde_json does not escape non-ASCII, so CJK labels land in the file
/// as-is (UTF-8).
pub fn write_document(document: &BoardDocument, path: &Path) -> AppResult<()> {
    info(format!("Writing board configuration: {}", path.display()));

    let json_data = serde_json::to_string_pretty(document)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("Board configuration", path);
    Ok(())
}

/// Read a board document. Unknown keys are ignored and every known key is
/// optional (a bare `{}` is an empty document).
pub fn read_document(path: &Path) -> AppResult<BoardDocument> {
    let content = std::fs::read_to_string(path)?;
    let document: BoardDocument = serde_json::from_str(&content)?;
    Ok(document)
}

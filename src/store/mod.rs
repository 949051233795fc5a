//! Working roster persistence.
//!
//! The roster lives between CLI invocations in a JSON file shaped like
//! `{"examInfos": [...]}`. A missing file or a missing `examInfos` key
//! both read as an empty roster; mutating commands save only after the
//! operation succeeded, so a failed attempt leaves the file untouched.

use crate::core::Roster;
use crate::errors::AppResult;
use crate::models::ExamRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Default)]
struct RosterFile {
    #[serde(rename = "examInfos", default)]
    exam_infos: Vec<ExamRecord>,
}

/// Load the working roster. A missing file is an empty roster.
pub fn load(path: &str) -> AppResult<Roster> {
    let p = Path::new(path);
    if !p.exists() {
        return Ok(Roster::new());
    }

    let content = fs::read_to_string(p)?;
    let file: RosterFile = serde_json::from_str(&content)?;
    Ok(Roster::from_records(file.exam_infos))
}

/// Save the working roster, creating parent directories as needed.
pub fn save(path: &str, roster: &Roster) -> AppResult<()> {
    let p = Path::new(path);
    if let Some(parent) = p.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = RosterFile {
        exam_infos: roster.records().to_vec(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(p, json)?;
    Ok(())
}

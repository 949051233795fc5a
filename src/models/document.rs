use serde::{Deserialize, Serialize};

use super::record::ExamRecord;

/// The three header fields of an exported board configuration.
#[derive(Debug, Clone)]
pub struct BoardHeader {
    pub exam_name: String, // board title (examName)
    pub message: String,   // board subtitle
    pub room: String,      // room label
}

impl BoardHeader {
    pub fn new(exam_name: String, message: String, room: String) -> Self {
        Self {
            exam_name,
            message,
            room,
        }
    }

    /// True when every field is non-empty after trimming.
    pub fn is_complete(&self) -> bool {
        !self.exam_name.trim().is_empty()
            && !self.message.trim().is_empty()
            && !self.room.trim().is_empty()
    }
}

/// The full document consumed by the exam board display.
///
/// Unknown keys are ignored on read and a missing `examInfos` is treated
/// as an empty sequence, so any document with at least the record list can
/// be opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDocument {
    #[serde(rename = "examName", default)]
    pub exam_name: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub room: String,

    #[serde(rename = "examInfos", default)]
    pub exam_infos: Vec<ExamRecord>,
}

impl BoardDocument {
    pub fn new(header: BoardHeader, exam_infos: Vec<ExamRecord>) -> Self {
        Self {
            exam_name: header.exam_name,
            message: header.message,
            room: header.room,
            exam_infos,
        }
    }
}

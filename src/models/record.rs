use serde::{Deserialize, Serialize};

/// A single exam entry as shown on the board.
///
/// `start` and `end` hold canonical timestamps ("YYYY-MM-DDTHH:MM:SS").
/// Records built through `RecordLogic::build` are always canonical;
/// records loaded from an existing document are trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub name: String,  // ⇔ examInfos[].name (subject label, may be CJK)
    pub start: String, // ⇔ examInfos[].start (TEXT "YYYY-MM-DDTHH:MM:SS")
    pub end: String,   // ⇔ examInfos[].end   (TEXT "YYYY-MM-DDTHH:MM:SS")
}

impl ExamRecord {
    pub fn new(name: String, start: String, end: String) -> Self {
        Self { name, start, end }
    }

    /// One-line summary used by list views.
    pub fn summary(&self) -> String {
        format!("{} - {} to {}", self.name, self.start, self.end)
    }

    /// Date part of the start timestamp ("YYYY-MM-DD"), if canonical.
    pub fn start_date(&self) -> Option<&str> {
        self.start.split_once('T').map(|(d, _)| d)
    }

    /// Time part of the start timestamp ("HH:MM:SS"), if canonical.
    pub fn start_time(&self) -> Option<&str> {
        self.start.split_once('T').map(|(_, t)| t)
    }

    /// Time part of the end timestamp ("HH:MM:SS"), if canonical.
    pub fn end_time(&self) -> Option<&str> {
        self.end.split_once('T').map(|(_, t)| t)
    }
}

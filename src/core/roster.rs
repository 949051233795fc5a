//! The roster: an ordered, mutable list of exam records.
//!
//! Insertion order is display and export order. Duplicates are permitted
//! and no ordering between a record's start and end is enforced.

use crate::errors::{AppError, AppResult};
use crate::models::{BoardDocument, BoardHeader, ExamRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<ExamRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ExamRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExamRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ExamRecord> {
        self.records.get(index)
    }

    /// Append a record at the end.
    pub fn append(&mut self, record: ExamRecord) {
        self.records.push(record);
    }

    /// Replace the record at `index` wholesale.
    pub fn replace_at(&mut self, index: usize, record: ExamRecord) -> AppResult<()> {
        if index >= self.records.len() {
            return Err(AppError::IndexOutOfRange(index));
        }
        self.records[index] = record;
        Ok(())
    }

    /// Remove and return the record at `index`.
    pub fn remove_at(&mut self, index: usize) -> AppResult<ExamRecord> {
        if index >= self.records.len() {
            return Err(AppError::IndexOutOfRange(index));
        }
        Ok(self.records.remove(index))
    }

    /// Swap the record at `index` with its predecessor.
    /// Returns false (no-op, not an error) at the top boundary or for an
    /// invalid index.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.records.len() {
            return false;
        }
        self.records.swap(index, index - 1);
        true
    }

    /// Swap the record at `index` with its successor.
    /// Returns false (no-op, not an error) at the bottom boundary or for an
    /// invalid index.
    pub fn move_down(&mut self, index: usize) -> bool {
        if self.records.is_empty() || index >= self.records.len() - 1 {
            return false;
        }
        self.records.swap(index, index + 1);
        true
    }

    /// Replace the whole roster with the document's record list, verbatim.
    /// Imported records are trusted as already well-formed.
    pub fn load_from(&mut self, document: BoardDocument) {
        self.records = document.exam_infos;
    }

    /// Combine the header with the current ordered sequence.
    /// Every header field must be non-empty after trimming.
    pub fn export_to(&self, header: &BoardHeader) -> AppResult<BoardDocument> {
        if !header.is_complete() {
            return Err(AppError::EmptyField);
        }
        Ok(BoardDocument::new(header.clone(), self.records.clone()))
    }
}

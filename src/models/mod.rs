pub mod document;
pub mod record;

pub use document::{BoardDocument, BoardHeader};
pub use record::ExamRecord;

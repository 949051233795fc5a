pub mod backup;
pub mod roster;
pub mod validate;

pub use roster::Roster;
pub use validate::RecordLogic;

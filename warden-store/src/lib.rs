/// In-memory warning log.
pub mod warnings;

pub use warnings::{WarningEntry, WarningRecord, WarningStore};

//! Record processing context
//!
//! Carries "which record am I working on" through the flow and into logs.

use std::fmt::Display;

use crate::models::record::{PersonnelCategory, Record};

/// Context for one record being processed
#[derive(Debug, Clone)]
pub struct RecordCtx {
    /// Position in the batch, 1-based, for logs
    pub index: usize,
    pub total: usize,
    /// Identity line: name plus national id
    pub who: String,
    pub category: PersonnelCategory,
}

impl RecordCtx {
    pub fn new(index: usize, total: usize, record: &Record) -> Self {
        let who = match record.national_id() {
            "" => record.display_name(),
            id => format!("{} ({})", record.display_name(), id),
        };
        Self {
            index,
            total,
            who,
            category: record.category,
        }
    }
}

impl Display for RecordCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[record {}/{} {} #{}]", self.index, self.total, self.category, self.who)
    }
}

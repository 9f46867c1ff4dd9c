//! Per-record outcomes and the history entries built from them

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

use crate::models::record::{PersonnelCategory, Record};

/// Final status of one processed record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryStatus {
    Success,
    Failed,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Success => write!(f, "success"),
            EntryStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One outcome per record, appended in processing order
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub status: EntryStatus,
    pub notes: String,
    pub timestamp: DateTime<Local>,
}

impl BatchOutcome {
    pub fn success() -> Self {
        Self {
            status: EntryStatus::Success,
            notes: String::new(),
            timestamp: Local::now(),
        }
    }

    pub fn failed(notes: impl Into<String>) -> Self {
        Self {
            status: EntryStatus::Failed,
            notes: notes.into(),
            timestamp: Local::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == EntryStatus::Success
    }
}

/// History entry handed to the history collaborator, one per record
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub category: String,
    pub status: EntryStatus,
    pub notes: String,
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn from_outcome(record: &Record, outcome: &BatchOutcome) -> Self {
        Self {
            national_id: record.national_id().to_string(),
            first_name: record.first_name().to_string(),
            last_name: record.last_name().to_string(),
            category: match record.category {
                PersonnelCategory::Worker => "isci".to_string(),
                PersonnelCategory::Officer => "memur".to_string(),
            },
            status: outcome.status,
            notes: outcome.notes.clone(),
            timestamp: outcome.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

//! Unresolved-field journal
//!
//! Fields the filler could not place anywhere end up here, one line each,
//! so a human can patch the portal entries by hand afterwards. Only deals
//! with a single field at a time; knows nothing about the batch.

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// Appends unresolved-field lines to a text file
pub struct WarnWriter {
    path: String,
}

impl WarnWriter {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Record one unresolved field.
    ///
    /// `who` identifies the record (name + national id), `field` the
    /// canonical field name, `reason` what went wrong.
    pub fn write(&self, who: &str, field: &str, reason: &str) -> Result<()> {
        debug!("journaling unresolved field: {} | {}", who, field);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{} | {} | {}", who, field, reason)?;
        Ok(())
    }
}

//! Record sheet loading
//!
//! The spreadsheet itself is exported upstream into a small TOML matrix:
//! a `headers` array and a `rows` array of arrays, plus the personnel
//! category the sheet was exported for. Parsing the spreadsheet is not this
//! crate's business; translating its headers into canonical field names is.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::models::record::{PersonnelCategory, Record};

/// On-disk shape of an exported sheet
#[derive(Debug, Deserialize)]
pub struct SheetFile {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// "isci" or "memur"; defaults to işçi when absent
    #[serde(default)]
    pub category: Option<String>,
}

/// Load and parse a sheet file
pub async fn load_sheet(path: &Path) -> Result<SheetFile> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read sheet file: {}", path.display()))?;
    let sheet: SheetFile = toml::from_str(&content)
        .with_context(|| format!("could not parse sheet file: {}", path.display()))?;
    Ok(sheet)
}

/// Load a sheet and translate every row into a record
pub async fn load_records(path: &Path) -> Result<Vec<Record>> {
    let sheet = load_sheet(path).await?;

    let category = match sheet.category.as_deref() {
        Some(raw) => PersonnelCategory::parse(raw)
            .with_context(|| format!("unknown personnel category: {}", raw))?,
        None => PersonnelCategory::Worker,
    };

    let records: Vec<Record> = sheet
        .rows
        .iter()
        .map(|cells| Record::from_row(&sheet.headers, cells, category))
        .filter(|record| !record.is_empty())
        .collect();

    info!(
        "loaded {} records ({}) from {}",
        records.len(),
        category,
        path.display()
    );
    Ok(records)
}

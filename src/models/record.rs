//! One record = one person to enter into the portal

use std::collections::BTreeMap;
use std::fmt;

use crate::portal::mapping;

/// Which portal form variant a record is submitted under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonnelCategory {
    /// Hourly personnel ("işçi")
    Worker,
    /// Salaried personnel ("memur")
    Officer,
}

impl PersonnelCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match crate::utils::text::fold_for_match(raw).as_str() {
            "isci" | "worker" => Some(PersonnelCategory::Worker),
            "memur" | "officer" => Some(PersonnelCategory::Officer),
            _ => None,
        }
    }
}

impl fmt::Display for PersonnelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonnelCategory::Worker => write!(f, "işçi"),
            PersonnelCategory::Officer => write!(f, "memur"),
        }
    }
}

/// Mapping from canonical field name to the value to enter.
///
/// Values are kept as the strings the spreadsheet carried; per-kind
/// interpretation happens at fill time.
#[derive(Debug, Clone)]
pub struct Record {
    values: BTreeMap<String, String>,
    pub category: PersonnelCategory,
}

impl Record {
    pub fn new(category: PersonnelCategory) -> Self {
        Self {
            values: BTreeMap::new(),
            category,
        }
    }

    /// Build a record from one spreadsheet row.
    ///
    /// Headers are translated through the fixed header table; a header the
    /// table does not know passes through unchanged (the filler ignores
    /// names that match no field). Empty cells are dropped.
    pub fn from_row(headers: &[String], cells: &[String], category: PersonnelCategory) -> Self {
        let mut record = Record::new(category);
        for (header, cell) in headers.iter().zip(cells.iter()) {
            if cell.trim().is_empty() {
                continue;
            }
            let canonical = mapping::canonical_field_name(header);
            record.set(canonical, cell.trim());
        }
        record
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Short identity line for logs and history
    pub fn display_name(&self) -> String {
        let ad = self.get(mapping::FIRST_NAME_FIELD).unwrap_or("?");
        let soyad = self.get(mapping::LAST_NAME_FIELD).unwrap_or("?");
        format!("{} {}", ad, soyad)
    }

    pub fn national_id(&self) -> &str {
        self.get(mapping::NATIONAL_ID_FIELD).unwrap_or("")
    }

    pub fn first_name(&self) -> &str {
        self.get(mapping::FIRST_NAME_FIELD).unwrap_or("")
    }

    pub fn last_name(&self) -> &str {
        self.get(mapping::LAST_NAME_FIELD).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_ad_maps_to_first_name() {
        let headers = vec!["AD".to_string(), "SOYAD".to_string()];
        let cells = vec!["Ahmet".to_string(), "Yılmaz".to_string()];
        let record = Record::from_row(&headers, &cells, PersonnelCategory::Worker);
        assert_eq!(record.get("ad"), Some("Ahmet"));
        assert_eq!(record.get("soyad"), Some("Yılmaz"));
    }

    #[test]
    fn unknown_headers_pass_through_unchanged() {
        let headers = vec!["NOTLAR".to_string()];
        let cells = vec!["ek bilgi".to_string()];
        let record = Record::from_row(&headers, &cells, PersonnelCategory::Worker);
        assert_eq!(record.get("NOTLAR"), Some("ek bilgi"));
    }

    #[test]
    fn header_match_is_case_sensitive() {
        let headers = vec!["ad".to_string()];
        let cells = vec!["Ahmet".to_string()];
        let record = Record::from_row(&headers, &cells, PersonnelCategory::Worker);
        // lowercase "ad" is not the exported header literal, so no translation
        // happens; it still lands under the same key only because the
        // canonical name is identical here
        assert_eq!(record.get("ad"), Some("Ahmet"));
        let headers = vec!["Soyad".to_string()];
        let cells = vec!["Kaya".to_string()];
        let record = Record::from_row(&headers, &cells, PersonnelCategory::Worker);
        assert_eq!(record.get("Soyad"), Some("Kaya"));
        assert_eq!(record.get("soyad"), None);
    }

    #[test]
    fn empty_cells_are_dropped() {
        let headers = vec!["AD".to_string(), "SOYAD".to_string()];
        let cells = vec!["  ".to_string(), "Demir".to_string()];
        let record = Record::from_row(&headers, &cells, PersonnelCategory::Officer);
        assert_eq!(record.get("ad"), None);
        assert_eq!(record.get("soyad"), Some("Demir"));
    }

    #[test]
    fn category_parses_both_spellings() {
        assert_eq!(PersonnelCategory::parse("İŞÇİ"), Some(PersonnelCategory::Worker));
        assert_eq!(PersonnelCategory::parse("memur"), Some(PersonnelCategory::Officer));
        assert_eq!(PersonnelCategory::parse("stajyer"), None);
    }
}

//! Form schema: the full field set of one portal form variant

use crate::models::field::FieldDescriptor;

/// Locator candidates for one logical tab of the form
#[derive(Debug, Clone)]
pub struct TabLocator {
    pub tab_index: u8,
    pub label: &'static str,
    /// Tried in order until one resolves
    pub selectors: &'static [&'static str],
}

/// Immutable description of the whole multi-tab form.
///
/// Built once at startup and passed by reference into every component that
/// needs it; nothing here changes during a run.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldDescriptor>,
    tabs: Vec<TabLocator>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDescriptor>, tabs: Vec<TabLocator>) -> Self {
        Self { fields, tabs }
    }

    /// All fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields of one tab, in declaration order
    pub fn fields_for_tab(&self, tab_index: u8) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(move |f| f.tab_index == tab_index)
    }

    /// Tab indexes, ascending and deduped
    pub fn tab_indexes(&self) -> Vec<u8> {
        let mut indexes: Vec<u8> = self.fields.iter().map(|f| f.tab_index).collect();
        indexes.sort_unstable();
        indexes.dedup();
        indexes
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn tab_locator(&self, tab_index: u8) -> Option<&TabLocator> {
        self.tabs.iter().find(|t| t.tab_index == tab_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::FieldDescriptor;

    fn schema() -> FormSchema {
        FormSchema::new(
            vec![
                FieldDescriptor::text("soyad", "Soyad", "#txtSoyad", true, 1),
                FieldDescriptor::text("iban", "IBAN", "#txtIban", false, 3),
                FieldDescriptor::text("ad", "Ad", "#txtAd", true, 1),
                FieldDescriptor::text("telefon", "Telefon", "#txtTelefon", false, 2),
            ],
            vec![TabLocator {
                tab_index: 1,
                label: "Kimlik",
                selectors: &["#tabKimlik"],
            }],
        )
    }

    #[test]
    fn tab_indexes_are_ascending_and_deduped() {
        assert_eq!(schema().tab_indexes(), vec![1, 2, 3]);
    }

    #[test]
    fn fields_for_tab_keeps_declaration_order() {
        let schema = schema();
        let names: Vec<&str> = schema.fields_for_tab(1).map(|f| f.name).collect();
        assert_eq!(names, vec!["soyad", "ad"]);
    }

    #[test]
    fn unknown_tab_has_no_locator() {
        assert!(schema().tab_locator(9).is_none());
    }
}

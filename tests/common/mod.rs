//! In-memory [`DomDriver`] used by the driver-level tests
//!
//! Models a page as a selector-keyed element map plus a row list for the
//! composite group. Records every interaction so tests can assert attempt
//! order and write counts.

// not every test binary uses every helper
#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use personel_entry_bot::DomDriver;

/// One fake element
#[derive(Debug, Clone)]
pub struct FakeElement {
    pub value: String,
    pub checked: bool,
    pub is_checkbox: bool,
    pub options: Vec<String>,
    /// Keystroke entry lands in the value
    pub keys_work: bool,
    /// Bare assignment lands in the value
    pub silent_set_works: bool,
    /// Event-dispatching assignment lands in the value
    pub set_works: bool,
}

impl Default for FakeElement {
    fn default() -> Self {
        Self {
            value: String::new(),
            checked: false,
            is_checkbox: false,
            options: Vec::new(),
            keys_work: true,
            silent_set_works: true,
            set_works: true,
        }
    }
}

/// One composite sub-row
#[derive(Debug, Clone, Default)]
pub struct FakeRow {
    pub text: String,
    pub checkbox: bool,
    pub radio: bool,
}

#[derive(Default)]
pub struct FakeDom {
    pub elements: Mutex<BTreeMap<String, FakeElement>>,
    pub rows: Mutex<Vec<FakeRow>>,
    /// Every selector handed to any driver call, in call order
    pub attempts: Mutex<Vec<String>>,
    /// Every mutation as `(selector, what)`
    pub writes: Mutex<Vec<(String, String)>>,
    /// Every URL passed to `goto`
    pub visited: Mutex<Vec<String>>,
    /// 1-based `goto` call number that fails with a connection error
    pub fail_goto_at: Mutex<Option<usize>>,
    pub content: Mutex<String>,
    pub url: Mutex<String>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, selector: &str, element: FakeElement) {
        self.elements
            .lock()
            .unwrap()
            .insert(selector.to_string(), element);
    }

    /// Plain empty element, enough to exist and be clicked
    pub fn put_plain(&self, selector: &str) {
        self.put(selector, FakeElement::default());
    }

    pub fn put_row(&self, text: &str) {
        self.rows.lock().unwrap().push(FakeRow {
            text: text.to_string(),
            ..FakeRow::default()
        });
    }

    pub fn value_of(&self, selector: &str) -> String {
        self.elements
            .lock()
            .unwrap()
            .get(selector)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    pub fn set_content(&self, content: &str) {
        *self.content.lock().unwrap() = content.to_string();
    }

    pub fn attempts_on(&self, selector: &str) -> usize {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .filter(|s| *s == selector)
            .count()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    fn note_attempt(&self, selector: &str) {
        self.attempts.lock().unwrap().push(selector.to_string());
    }

    fn note_write(&self, selector: &str, what: impl Into<String>) {
        self.writes
            .lock()
            .unwrap()
            .push((selector.to_string(), what.into()));
    }
}

#[async_trait]
impl DomDriver for FakeDom {
    async fn goto(&self, url: &str) -> Result<()> {
        let count = {
            let mut visited = self.visited.lock().unwrap();
            visited.push(url.to_string());
            visited.len()
        };
        if *self.fail_goto_at.lock().unwrap() == Some(count) {
            bail!("connection reset during navigation");
        }
        *self.url.lock().unwrap() = url.to_string();
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.url.lock().unwrap().clone())
    }

    async fn page_text(&self) -> Result<String> {
        Ok(self.content.lock().unwrap().clone())
    }

    async fn exists(&self, selector: &str) -> Result<bool> {
        self.note_attempt(selector);
        Ok(self.elements.lock().unwrap().contains_key(selector))
    }

    async fn click(&self, selector: &str) -> Result<bool> {
        self.note_attempt(selector);
        if self.elements.lock().unwrap().contains_key(selector) {
            self.note_write(selector, "click");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn read_value(&self, selector: &str) -> Result<Option<String>> {
        self.note_attempt(selector);
        Ok(self.elements.lock().unwrap().get(selector).map(|e| {
            if e.is_checkbox {
                if e.checked { "1".to_string() } else { String::new() }
            } else {
                e.value.clone()
            }
        }))
    }

    async fn set_value_silent(&self, selector: &str, value: &str) -> Result<bool> {
        self.note_attempt(selector);
        let mut elements = self.elements.lock().unwrap();
        let Some(element) = elements.get_mut(selector) else {
            return Ok(false);
        };
        if element.silent_set_works {
            element.value = value.to_string();
        }
        drop(elements);
        self.note_write(selector, format!("silent={}", value));
        Ok(true)
    }

    async fn set_value(&self, selector: &str, value: &str) -> Result<bool> {
        self.note_attempt(selector);
        let mut elements = self.elements.lock().unwrap();
        let Some(element) = elements.get_mut(selector) else {
            return Ok(false);
        };
        if element.set_works {
            element.value = value.to_string();
        }
        drop(elements);
        self.note_write(selector, format!("set={}", value));
        Ok(true)
    }

    async fn type_keys(&self, selector: &str, text: &str) -> Result<bool> {
        self.note_attempt(selector);
        let mut elements = self.elements.lock().unwrap();
        let Some(element) = elements.get_mut(selector) else {
            return Ok(false);
        };
        element.value.clear();
        if element.keys_work {
            element.value = text.to_string();
        }
        drop(elements);
        self.note_write(selector, format!("keys={}", text));
        Ok(true)
    }

    async fn select_options(&self, selector: &str) -> Result<Option<Vec<String>>> {
        self.note_attempt(selector);
        Ok(self
            .elements
            .lock()
            .unwrap()
            .get(selector)
            .filter(|e| !e.options.is_empty())
            .map(|e| e.options.clone()))
    }

    async fn select_by_index(&self, selector: &str, index: usize) -> Result<bool> {
        self.note_attempt(selector);
        let mut elements = self.elements.lock().unwrap();
        let Some(element) = elements.get_mut(selector) else {
            return Ok(false);
        };
        let Some(option) = element.options.get(index).cloned() else {
            return Ok(false);
        };
        element.value = option.clone();
        drop(elements);
        self.note_write(selector, format!("select={}", option));
        Ok(true)
    }

    async fn set_checked(&self, selector: &str, checked: bool) -> Result<bool> {
        self.note_attempt(selector);
        let mut elements = self.elements.lock().unwrap();
        let Some(element) = elements.get_mut(selector) else {
            return Ok(false);
        };
        element.checked = checked;
        drop(elements);
        self.note_write(selector, format!("checked={}", checked));
        Ok(true)
    }

    async fn toggle_labeled_rows(&self, row_selector: &str, label: &str) -> Result<usize> {
        self.note_attempt(row_selector);
        let mut rows = self.rows.lock().unwrap();
        let mut touched = 0usize;
        for row in rows.iter_mut() {
            if row.text.contains(label) {
                row.checkbox = true;
                row.radio = true;
                touched += 1;
            }
        }
        drop(rows);
        if touched > 0 {
            self.note_write(row_selector, format!("toggle={}x{}", label, touched));
        }
        Ok(touched)
    }
}

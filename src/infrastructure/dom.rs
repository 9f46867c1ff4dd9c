//! Driver seam between the automation engine and the browser
//!
//! Every page interaction the engine performs goes through [`DomDriver`],
//! so the underlying automation stack is swappable (and fakeable in tests)
//! without touching the filling or login algorithms.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Object-safe page interaction surface.
///
/// Locator-taking methods resolve one CSS selector; a selector that matches
/// nothing reports `false` / `None` rather than an error, so callers can
/// walk their candidate lists. Errors are reserved for a broken driver
/// connection.
#[async_trait]
pub trait DomDriver: Send + Sync {
    /// Navigate the page and wait for the load to finish
    async fn goto(&self, url: &str) -> Result<()>;

    /// Current page URL
    async fn current_url(&self) -> Result<String>;

    /// Full page content, used for marker probing
    async fn page_text(&self) -> Result<String>;

    /// Whether the selector resolves right now
    async fn exists(&self, selector: &str) -> Result<bool>;

    /// Click the element; `false` when the selector resolves nothing
    async fn click(&self, selector: &str) -> Result<bool>;

    /// Current value of an input-shaped element; `None` when unresolved
    async fn read_value(&self, selector: &str) -> Result<Option<String>>;

    /// Bare value assignment, no events
    async fn set_value_silent(&self, selector: &str, value: &str) -> Result<bool>;

    /// Script-level value assignment with `input` + `change` dispatch
    async fn set_value(&self, selector: &str, value: &str) -> Result<bool>;

    /// Trusted keystroke entry; clears the field first
    async fn type_keys(&self, selector: &str, text: &str) -> Result<bool>;

    /// Visible texts of a select's options; `None` when unresolved
    async fn select_options(&self, selector: &str) -> Result<Option<Vec<String>>>;

    /// Pick an option by index and dispatch `change`
    async fn select_by_index(&self, selector: &str, index: usize) -> Result<bool>;

    /// Check or uncheck with a `change` dispatch
    async fn set_checked(&self, selector: &str, checked: bool) -> Result<bool>;

    /// Toggle the selectable controls (checkbox + radio) of every sub-row
    /// under `row_selector` whose visible text contains `label`.
    /// Returns the number of rows touched.
    async fn toggle_labeled_rows(&self, row_selector: &str, label: &str) -> Result<usize>;
}

/// Bounded poll for a selector to appear.
///
/// Cooperative waiting only: fixed poll interval, hard timeout, no spin.
pub async fn wait_for_selector<D: DomDriver + ?Sized>(
    dom: &D,
    selector: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<bool> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if dom.exists(selector).await? {
            return Ok(true);
        }
        if tokio::time::Instant::now() >= deadline {
            return Ok(false);
        }
        sleep(poll).await;
    }
}

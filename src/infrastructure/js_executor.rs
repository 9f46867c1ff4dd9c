//! JS executor, the only owner of the live page
//!
//! Holds the scarce `Page` resource and exposes capabilities: raw script
//! evaluation plus the [`DomDriver`] surface built on it. Knows nothing
//! about records, fields or the portal form.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::infrastructure::dom::DomDriver;

/// Page-owning executor
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Borrow the page for operations the driver surface does not cover
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Evaluate a script and return the raw JSON result
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// Evaluate a script and deserialize the result
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// JSON-escape a string for safe embedding into a script
    fn quote(text: &str) -> String {
        serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
    }
}

#[async_trait]
impl DomDriver for JsExecutor {
    async fn goto(&self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .with_context(|| format!("navigation to {} failed", url))?;
        self.page.wait_for_navigation().await.ok();
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    async fn page_text(&self) -> Result<String> {
        Ok(self.page.content().await?)
    }

    async fn exists(&self, selector: &str) -> Result<bool> {
        let js = format!(
            "!!document.querySelector({sel})",
            sel = Self::quote(selector)
        );
        self.eval_as::<bool>(js).await
    }

    async fn click(&self, selector: &str) -> Result<bool> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.click();
                return true;
            }})()"#,
            sel = Self::quote(selector)
        );
        self.eval_as::<bool>(js).await
    }

    async fn read_value(&self, selector: &str) -> Result<Option<String>> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return null;
                if (el.type === 'checkbox' || el.type === 'radio') return el.checked ? '1' : '';
                if (el.value !== undefined) return String(el.value);
                return el.textContent || '';
            }})()"#,
            sel = Self::quote(selector)
        );
        self.eval_as::<Option<String>>(js).await
    }

    async fn set_value_silent(&self, selector: &str, value: &str) -> Result<bool> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.value = {val};
                return true;
            }})()"#,
            sel = Self::quote(selector),
            val = Self::quote(value)
        );
        self.eval_as::<bool>(js).await
    }

    async fn set_value(&self, selector: &str, value: &str) -> Result<bool> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.value = {val};
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = Self::quote(selector),
            val = Self::quote(value)
        );
        self.eval_as::<bool>(js).await
    }

    async fn type_keys(&self, selector: &str, text: &str) -> Result<bool> {
        // trusted input events need the CDP input domain, not a script
        let element = match self.page.find_element(selector).await {
            Ok(element) => element,
            Err(_) => return Ok(false),
        };
        // clear whatever the widget pre-filled
        self.set_value(selector, "").await?;
        element.click().await?;
        element.type_str(text).await?;
        Ok(true)
    }

    async fn select_options(&self, selector: &str) -> Result<Option<Vec<String>>> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el || !el.options) return null;
                return Array.from(el.options).map(o => o.text);
            }})()"#,
            sel = Self::quote(selector)
        );
        self.eval_as::<Option<Vec<String>>>(js).await
    }

    async fn select_by_index(&self, selector: &str, index: usize) -> Result<bool> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el || !el.options || el.options.length <= {index}) return false;
                el.selectedIndex = {index};
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = Self::quote(selector),
            index = index
        );
        self.eval_as::<bool>(js).await
    }

    async fn set_checked(&self, selector: &str, checked: bool) -> Result<bool> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.checked = {checked};
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = Self::quote(selector),
            checked = checked
        );
        self.eval_as::<bool>(js).await
    }

    async fn toggle_labeled_rows(&self, row_selector: &str, label: &str) -> Result<usize> {
        let js = format!(
            r#"(() => {{
                const rows = document.querySelectorAll({rows});
                let touched = 0;
                for (const row of rows) {{
                    if (!(row.textContent || '').includes({label})) continue;
                    const box = row.querySelector("input[type='checkbox']");
                    if (box && !box.checked) box.click();
                    const radio = row.querySelector("input[type='radio']");
                    if (radio && !radio.checked) radio.click();
                    touched += 1;
                }}
                return touched;
            }})()"#,
            rows = Self::quote(row_selector),
            label = Self::quote(label)
        );
        self.eval_as::<usize>(js).await
    }
}

//! Tab switching on the multi-section entry form

use anyhow::{bail, Result};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::infrastructure::dom::{wait_for_selector, DomDriver};
use crate::models::form::FormSchema;
use crate::portal::selectors::{POLL_INTERVAL, TAB_GRACE_DELAY};
use std::time::Duration;

/// Upper bound on waiting for a switched tab's fields to appear
const TAB_SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Switches the form between logical tabs
pub struct TabNavigator<'a> {
    schema: &'a FormSchema,
}

impl<'a> TabNavigator<'a> {
    pub fn new(schema: &'a FormSchema) -> Self {
        Self { schema }
    }

    /// Click the tab control and wait until the revealed section is usable.
    ///
    /// A tab control that never resolves is logged and treated
    /// optimistically; the per-field fallback chain contains the damage.
    /// An index outside the schema is a programming error and fails.
    pub async fn switch_to<D: DomDriver + ?Sized>(&self, dom: &D, tab_index: u8) -> Result<()> {
        let Some(tab) = self.schema.tab_locator(tab_index) else {
            bail!("tab {} is not part of the form schema", tab_index);
        };

        let mut clicked = false;
        for selector in tab.selectors {
            if dom.click(selector).await? {
                debug!("tab {} ({}) via {}", tab_index, tab.label, selector);
                clicked = true;
                break;
            }
        }
        if !clicked {
            warn!(
                "tab {} ({}): no tab control resolved, proceeding optimistically",
                tab_index, tab.label
            );
        }

        // wait for the first field of the tab to show up, then grant the
        // grace period the portal scripts need to attach field behaviors
        if let Some(first_field) = self.schema.fields_for_tab(tab_index).next() {
            let appeared = wait_for_selector(
                dom,
                first_field.primary_selector,
                TAB_SETTLE_TIMEOUT,
                POLL_INTERVAL,
            )
            .await?;
            if !appeared {
                warn!(
                    "tab {}: field {} did not appear within the settle window",
                    tab_index, first_field.name
                );
            }
        }
        sleep(TAB_GRACE_DELAY).await;
        Ok(())
    }
}

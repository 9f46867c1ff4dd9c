//! Backfill pass before leaving a tab
//!
//! The identity tab clears fields behind our back: selecting a value in
//! one dropdown triggers a partial postback that resets inputs filled
//! earlier. Before the form moves on, every field of the tab is re-read
//! and re-filled once where the portal dropped the value.

use anyhow::Result;
use tracing::{debug, info};

use crate::infrastructure::dom::DomDriver;
use crate::models::field::InputKind;
use crate::models::form::FormSchema;
use crate::models::record::Record;
use crate::services::field_filler::FieldFiller;

/// Re-checks and re-applies a tab's fields
pub struct BackfillVerifier<'a> {
    schema: &'a FormSchema,
    filler: &'a FieldFiller,
}

impl<'a> BackfillVerifier<'a> {
    pub fn new(schema: &'a FormSchema, filler: &'a FieldFiller) -> Self {
        Self { schema, filler }
    }

    /// One verification pass over the tab being left.
    ///
    /// A field is re-filled only when its current value is empty while the
    /// intended value (record, else descriptor default) is not. Filled
    /// fields are left untouched, so a second pass writes nothing.
    pub async fn verify<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        tab_index: u8,
        record: &Record,
    ) -> Result<()> {
        let mut refilled = 0usize;
        for field in self.schema.fields_for_tab(tab_index) {
            // composite rows keep their own state, nothing to re-read
            if field.input_kind == InputKind::CompositeGroup {
                continue;
            }
            let intended = record
                .get(field.name)
                .or(field.default_value)
                .unwrap_or("")
                .trim();
            if intended.is_empty() {
                continue;
            }
            // an unchecked box and a cleared one read the same, so only
            // boxes meant to be checked are verifiable
            if field.input_kind == InputKind::Checkbox
                && !crate::portal::mapping::is_truthy(intended)
            {
                continue;
            }

            if self.current_value(dom, field).await?.trim().is_empty() {
                info!("backfill: {} came back empty, re-filling", field.name);
                self.filler.fill(dom, field, intended).await?;
                refilled += 1;
            }
        }
        if refilled > 0 {
            info!("backfill pass on tab {}: re-filled {} fields", tab_index, refilled);
        } else {
            debug!("backfill pass on tab {}: nothing to do", tab_index);
        }
        Ok(())
    }

    /// Current value through the first candidate selector that resolves
    async fn current_value<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        field: &crate::models::field::FieldDescriptor,
    ) -> Result<String> {
        for selector in self.filler.candidates(field) {
            if let Some(value) = dom.read_value(&selector).await? {
                return Ok(value);
            }
        }
        Ok(String::new())
    }
}

//! Per-record entry flow
//!
//! Defines the complete processing of one person: clean form, tabs in
//! ascending order, fields in declaration order, the backfill pass when
//! leaving the identity tab, submit, clean slate for the next record.

use anyhow::{bail, Result};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::infrastructure::dom::DomDriver;
use crate::models::form::FormSchema;
use crate::models::record::Record;
use crate::portal::selectors as sel;
use crate::services::{BackfillVerifier, FieldFiller, TabNavigator, WarnWriter};
use crate::utils::text::truncate_text;
use crate::workflow::record_ctx::RecordCtx;

/// The identity tab resets values on portal postbacks, so it alone gets the
/// backfill pass.
const BACKFILL_TAB: u8 = 1;

/// Runs one record through the form
pub struct RecordFlow<'a> {
    schema: &'a FormSchema,
    filler: FieldFiller,
    warn_writer: WarnWriter,
    verbose_logging: bool,
}

impl<'a> RecordFlow<'a> {
    pub fn new(schema: &'a FormSchema, unresolved_log_file: &str, verbose_logging: bool) -> Self {
        Self {
            schema,
            filler: FieldFiller::new(),
            warn_writer: WarnWriter::new(unresolved_log_file),
            verbose_logging,
        }
    }

    /// Process one record on an already-authenticated session.
    ///
    /// Returns how many fields stayed unresolved. Unresolved fields are not
    /// errors; anything returned as `Err` fails the whole record.
    pub async fn run<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        record: &Record,
        ctx: &RecordCtx,
        entry_url: &str,
    ) -> Result<usize> {
        // fresh form state, whether this is the first record or a re-entry
        dom.goto(entry_url).await?;

        let navigator = TabNavigator::new(self.schema);
        let backfill = BackfillVerifier::new(self.schema, &self.filler);
        let mut unresolved = 0usize;

        for tab_index in self.schema.tab_indexes() {
            navigator.switch_to(dom, tab_index).await?;
            unresolved += self.fill_tab(dom, record, ctx, tab_index).await?;

            // the identity tab is verified before the form moves on
            if tab_index == BACKFILL_TAB {
                backfill.verify(dom, tab_index, record).await?;
            }
        }

        self.submit(dom).await?;
        sleep(sel::SUBMIT_SETTLE_DELAY).await;

        // clean slate for whoever comes next
        dom.goto(entry_url).await?;

        info!("{} ✓ record saved ({} fields unresolved)", ctx, unresolved);
        Ok(unresolved)
    }

    /// Fill every field of one tab, in declaration order
    async fn fill_tab<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        record: &Record,
        ctx: &RecordCtx,
        tab_index: u8,
    ) -> Result<usize> {
        let mut unresolved = 0usize;
        for field in self.schema.fields_for_tab(tab_index) {
            let Some(value) = record.get(field.name).or(field.default_value) else {
                if field.required {
                    warn!("{} required field {} has no value", ctx, field.name);
                }
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }
            if self.verbose_logging {
                debug!("{} {} = {}", ctx, field.name, truncate_text(value, 40));
            }

            if !self.filler.fill(dom, field, value).await? {
                unresolved += 1;
                if let Err(e) =
                    self.warn_writer
                        .write(&ctx.who, field.name, "no selector candidate resolved")
                {
                    warn!("{} unresolved-field journal write failed: {}", ctx, e);
                }
            }
        }
        Ok(unresolved)
    }

    async fn submit<D: DomDriver + ?Sized>(&self, dom: &D) -> Result<()> {
        for selector in sel::SUBMIT_BUTTONS {
            if dom.click(selector).await? {
                debug!("submitted via {}", selector);
                return Ok(());
            }
        }
        bail!("no submit control resolved on the entry form");
    }
}

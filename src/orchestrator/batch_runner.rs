//! Batch runner
//!
//! ## Responsibilities
//!
//! 1. **Fail fast**: empty batches and missing credentials never reach the
//!    browser.
//! 2. **Resource ownership**: the only module that acquires and releases
//!    the session; release runs on every exit path and never fails a run.
//! 3. **One login per batch**: records reuse the authenticated session.
//! 4. **Failure isolation**: a record that blows up becomes a `Failed`
//!    outcome, the next record still runs.
//! 5. **History**: every outcome is forwarded to the history collaborator.
//!
//! The record loop itself is driver-generic, so its ordering and
//! containment behavior is tested without a browser.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use anyhow::Result;

use crate::browser::{Session, SessionManager};
use crate::config::Config;
use crate::error::{AutomationError, ConfigError};
use crate::infrastructure::{DomDriver, JsExecutor};
use crate::models::form::FormSchema;
use crate::models::outcome::{BatchOutcome, HistoryEntry};
use crate::models::record::Record;
use crate::services::history::HistoryStore;
use crate::utils::logging;
use crate::workflow::{LoginFlow, RecordCtx, RecordFlow};

/// Cooperative cancellation, checked at record boundaries only
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Sequences a whole batch over one session
pub struct BatchRunner {
    config: Config,
    schema: FormSchema,
    history: Arc<dyn HistoryStore>,
}

impl BatchRunner {
    pub fn new(config: Config, schema: FormSchema, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            config,
            schema,
            history,
        }
    }

    /// Run the batch: validate, acquire, log in once, process every record,
    /// release. The returned error is only ever a pre-flight or login
    /// failure; record failures live inside the outcomes.
    pub async fn run(&self, records: &[Record], cancel: &CancelFlag) -> Result<Vec<BatchOutcome>> {
        if records.is_empty() {
            return Err(AutomationError::Config(ConfigError::EmptyRecordSet).into());
        }
        self.config.credentials.validate()?;

        logging::log_startup(records.len(), self.config.headless);

        let mut session =
            SessionManager::acquire(self.config.browser_debug_port, self.config.headless).await?;
        let result = self.run_with_session(&session, records, cancel).await;
        // single finalization path, taken on success, login failure and
        // cancellation alike
        SessionManager::release(&mut session).await;
        result
    }

    async fn run_with_session(
        &self,
        session: &Session,
        records: &[Record],
        cancel: &CancelFlag,
    ) -> Result<Vec<BatchOutcome>> {
        // Page clones share the underlying CDP target
        let executor = JsExecutor::new(session.page()?.clone());

        let state = LoginFlow::new(&self.config.credentials).run(&executor).await?;
        debug!("login finished in state {:?}", state);

        Ok(self.process_records(&executor, records, cancel).await)
    }

    /// The record loop. Never fails as a whole: every per-record error is
    /// contained in its outcome.
    pub async fn process_records<D: DomDriver + ?Sized>(
        &self,
        dom: &D,
        records: &[Record],
        cancel: &CancelFlag,
    ) -> Vec<BatchOutcome> {
        let flow = RecordFlow::new(
            &self.schema,
            &self.config.unresolved_log_file,
            self.config.verbose_logging,
        );
        let mut outcomes = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if cancel.is_requested() {
                warn!(
                    "⚠️ cancellation requested, stopping before record {}/{}",
                    index + 1,
                    records.len()
                );
                break;
            }

            let ctx = RecordCtx::new(index + 1, records.len(), record);
            logging::log_record_start(ctx.index, ctx.total, &ctx.who);

            let entry_url = self.config.credentials.entry_url(record.category);
            let outcome = match flow.run(dom, record, &ctx, entry_url).await {
                Ok(0) => BatchOutcome::success(),
                Ok(unresolved) => {
                    let mut outcome = BatchOutcome::success();
                    outcome.notes = format!("{} fields unresolved", unresolved);
                    outcome
                }
                Err(e) => {
                    error!("{} ❌ record failed: {}", ctx, e);
                    BatchOutcome::failed(e.to_string())
                }
            };

            self.history
                .append(HistoryEntry::from_outcome(record, &outcome));
            outcomes.push(outcome);
        }

        let success = outcomes.iter().filter(|o| o.is_success()).count();
        logging::log_final_stats(success, outcomes.len() - success, records.len());
        info!("history received {} entries", outcomes.len());
        outcomes
    }
}

//! # Personel Entry Bot
//!
//! Automated data entry into a web-based personnel-management portal:
//! log in (TOTP second factor included), walk the multi-tab entry form,
//! fill its fields from spreadsheet-sourced records and submit, one record
//! at a time over a single reused browser session.
//!
//! ## Architecture
//!
//! Four strict layers, dependencies pointing downward only:
//!
//! ### ① Infrastructure
//! - `infrastructure/` holds the scarce resource (the page) and exposes
//!   capabilities only
//! - `JsExecutor` is the single page owner; `DomDriver` is the seam every
//!   higher layer talks through
//! - `browser/` acquires and releases the session (attach first, launch as
//!   fallback, idempotent teardown)
//!
//! ### ② Services
//! - `services/` describe "what I can do" for a single field or concern
//! - `FieldFiller` places one value, `TabNavigator` switches one tab,
//!   `BackfillVerifier` re-checks one tab, `TotpGenerator` makes one code,
//!   `HistoryStore` takes one entry, `WarnWriter` journals one skip
//!
//! ### ③ Workflow
//! - `workflow/` defines complete flows: `LoginFlow` (once per batch) and
//!   `RecordFlow` (once per person), with `RecordCtx` carrying identity
//!
//! ### ④ Orchestration
//! - `orchestrator/batch_runner` owns the session, sequences records,
//!   isolates per-record failures and reports every outcome
//!
//! Portal-specific strings (URLs, selectors, markers, lookup tables) are
//! data in `portal/`, never embedded in the layers above.

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod portal;
pub mod services;
pub mod utils;
pub mod workflow;

// re-export the common surface
pub use config::{Config, Credentials};
pub use error::{AppResult, AutomationError};
pub use infrastructure::{DomDriver, JsExecutor};
pub use models::{BatchOutcome, EntryStatus, FieldDescriptor, FormSchema, InputKind, Record};
pub use orchestrator::{BatchRunner, CancelFlag};
pub use services::{FieldFiller, HistoryStore};
pub use workflow::{AuthState, LoginFlow, RecordFlow};

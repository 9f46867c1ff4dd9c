pub mod backfill_verifier;
pub mod field_filler;
pub mod history;
pub mod tab_navigator;
pub mod totp;
pub mod warn_writer;

pub use backfill_verifier::BackfillVerifier;
pub use field_filler::{FieldFiller, IdNameLocators, LocatorStrategy, Resolution};
pub use history::{FileHistory, HistoryStore, MemoryHistory};
pub use tab_navigator::TabNavigator;
pub use totp::TotpGenerator;
pub use warn_writer::WarnWriter;

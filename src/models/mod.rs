pub mod field;
pub mod form;
pub mod loaders;
pub mod manual;
pub mod outcome;
pub mod record;

pub use field::{FieldDescriptor, InputKind};
pub use form::FormSchema;
pub use outcome::{BatchOutcome, EntryStatus, HistoryEntry};
pub use record::{PersonnelCategory, Record};

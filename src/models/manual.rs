//! Typed conversion from manually entered values to a [`Record`]
//!
//! The dialog layer hands over one [`FieldInput`] per control it rendered;
//! this module turns them into record values per input kind and rejects an
//! incomplete record before any browser work starts. No property names are
//! resolved at runtime: every kind has its own arm.

use std::collections::BTreeMap;

use crate::error::{AppResult, AutomationError, ConfigError};
use crate::models::field::{FieldDescriptor, InputKind};
use crate::models::form::FormSchema;
use crate::models::record::{PersonnelCategory, Record};

/// Value captured from one dialog control
#[derive(Debug, Clone)]
pub enum FieldInput {
    Text(String),
    /// Chosen display value of a dropdown
    Choice(String),
    Flag(bool),
    Date(String),
    /// Selected labels of a composite group
    Labels(Vec<String>),
}

/// Everything the user typed into the manual-entry dialog
#[derive(Debug, Clone, Default)]
pub struct UserInput {
    values: BTreeMap<String, FieldInput>,
}

impl UserInput {
    pub fn set(&mut self, name: impl Into<String>, input: FieldInput) {
        self.values.insert(name.into(), input);
    }

    pub fn get(&self, name: &str) -> Option<&FieldInput> {
        self.values.get(name)
    }
}

/// Convert dialog input into a record, validating as we go.
///
/// A required field with neither a value nor a descriptor default fails the
/// whole conversion; the browser is never touched for a rejected record.
pub fn record_from_input(
    schema: &FormSchema,
    category: PersonnelCategory,
    input: &UserInput,
) -> AppResult<Record> {
    let mut record = Record::new(category);
    for field in schema.fields() {
        match input.get(field.name) {
            Some(raw) => {
                let value = extract_value(field, raw)?;
                if !value.is_empty() {
                    record.set(field.name, value);
                }
            }
            None => {
                if let Some(default) = field.default_value {
                    record.set(field.name, default);
                }
            }
        }
        if field.required && record.get(field.name).is_none() {
            return Err(AutomationError::Config(ConfigError::MissingRequiredField {
                field: field.name.to_string(),
            }));
        }
    }
    Ok(record)
}

/// One statically-typed extraction arm per input kind
fn extract_value(field: &FieldDescriptor, input: &FieldInput) -> AppResult<String> {
    match (field.input_kind, input) {
        (InputKind::Text, FieldInput::Text(value)) => Ok(value.trim().to_string()),
        (InputKind::Date, FieldInput::Date(value)) | (InputKind::Date, FieldInput::Text(value)) => {
            Ok(value.trim().to_string())
        }
        (InputKind::Select, FieldInput::Choice(value)) => {
            if field.options.iter().any(|o| *o == value) {
                Ok(value.clone())
            } else {
                Err(AutomationError::Config(ConfigError::UnknownOption {
                    field: field.name.to_string(),
                    value: value.clone(),
                }))
            }
        }
        (InputKind::Checkbox, FieldInput::Flag(set)) => {
            Ok(if *set { "Evet" } else { "Hayır" }.to_string())
        }
        (InputKind::CompositeGroup, FieldInput::Labels(labels)) => Ok(labels.join(", ")),
        (kind, _) => Err(AutomationError::Config(ConfigError::InputKindMismatch {
            field: field.name.to_string(),
            expected: kind.label(),
        })),
    }
}

//! Static description of one portal form field

/// Interaction family of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text input
    Text,
    /// Dropdown with a fixed option list
    Select,
    /// Single checkbox
    Checkbox,
    /// Date widget
    Date,
    /// Repeated sub-rows, each with a checkbox and a radio, picked by label
    CompositeGroup,
}

impl InputKind {
    /// Short name for logs and mismatch errors
    pub fn label(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Select => "select",
            InputKind::Checkbox => "checkbox",
            InputKind::Date => "date",
            InputKind::CompositeGroup => "composite group",
        }
    }
}

/// Static, immutable description of a single field on the target form.
///
/// Declared once per form variant; the engine never mutates these. Selector
/// strings are portal configuration, not behavior.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Canonical identifier, unique within a form
    pub name: &'static str,
    /// Label a human sees next to the control
    pub display_label: &'static str,
    /// Preferred locator, tried before any derived alternate
    pub primary_selector: &'static str,
    pub input_kind: InputKind,
    pub required: bool,
    pub max_length: Option<usize>,
    pub default_value: Option<&'static str>,
    /// Form section the field lives in, 1-based
    pub tab_index: u8,
    /// Allowed display values, in portal order (Select only)
    pub options: &'static [&'static str],
}

impl FieldDescriptor {
    /// Plain text field with no extras
    pub const fn text(
        name: &'static str,
        display_label: &'static str,
        primary_selector: &'static str,
        required: bool,
        tab_index: u8,
    ) -> Self {
        Self {
            name,
            display_label,
            primary_selector,
            input_kind: InputKind::Text,
            required,
            max_length: None,
            default_value: None,
            tab_index,
            options: &[],
        }
    }

    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn with_default(mut self, default_value: &'static str) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub const fn with_kind(mut self, input_kind: InputKind) -> Self {
        self.input_kind = input_kind;
        self
    }

    pub const fn with_options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }
}

//! Typed form state. Each control kind carries its own value shape, so the
//! validator and summary builder dispatch on the tag instead of probing DOM
//! properties at runtime.

/// Value of one named control, tagged by control kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Select(String),
    TextArea(String),
    /// Checked option value for the whole group, `None` when nothing is
    /// checked. One `FieldValue` per group, not per radio input.
    RadioGroup(Option<String>),
    Checkbox(bool),
    /// Every checked value in the group, in document order.
    CheckboxGroup(Vec<String>),
}

impl FieldValue {
    /// Last-resort display name when a field has no registry label and no id.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text field",
            FieldValue::Select(_) => "selection",
            FieldValue::TextArea(_) => "text area",
            FieldValue::RadioGroup(_) => "choice",
            FieldValue::Checkbox(_) => "checkbox",
            FieldValue::CheckboxGroup(_) => "checkboxes",
        }
    }

    /// Whether a required control with this value fails validation.
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Text(v) | FieldValue::Select(v) | FieldValue::TextArea(v) => {
                v.trim().is_empty()
            }
            FieldValue::RadioGroup(selected) => selected.is_none(),
            FieldValue::Checkbox(checked) => !checked,
            FieldValue::CheckboxGroup(checked) => checked.is_empty(),
        }
    }

    /// Normalized string for the confirmation summary.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(v) | FieldValue::Select(v) | FieldValue::TextArea(v) => {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    "empty".to_string()
                } else {
                    trimmed.to_string()
                }
            }
            FieldValue::RadioGroup(selected) => selected
                .clone()
                .unwrap_or_else(|| "not selected".to_string()),
            FieldValue::Checkbox(checked) => {
                if *checked { "Yes" } else { "No" }.to_string()
            }
            FieldValue::CheckboxGroup(checked) => {
                if checked.is_empty() {
                    "none".to_string()
                } else {
                    checked.join(", ")
                }
            }
        }
    }
}

/// One named control as captured at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: &'static str,
    pub required: bool,
    pub value: FieldValue,
}

impl Field {
    pub fn required(id: &'static str, value: FieldValue) -> Self {
        Field { id, required: true, value }
    }

    pub fn optional(id: &'static str, value: FieldValue) -> Self {
        Field { id, required: false, value }
    }
}

/// The 2x2 photo control. It is addressed by element id rather than form
/// field name, so it lives outside the named-field vector. Kept that way on
/// purpose; do not fold it into [`Field`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotoField {
    pub required: bool,
    pub file_name: Option<String>,
}

impl PhotoField {
    pub fn display(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| "no file selected".to_string())
    }
}

/// Point-in-time capture of the whole application form, rebuilt on every
/// submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub fields: Vec<Field>,
    pub photo: PhotoField,
}

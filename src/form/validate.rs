//! Required-field validation over a [`FormSnapshot`]. Pure; reads nothing
//! but the snapshot and the label registry.

use super::fields::FormSnapshot;
use super::registry;

/// Result of one validation pass. An absent form is deliberately distinct
/// from a form that validated clean: an empty missing-list means "nothing
/// failed", not "nothing was there to check".
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// No form snapshot was available; nothing was validated.
    NoForm,
    /// Labels of missing required fields, deduplicated, in encounter order.
    Missing(Vec<String>),
    Valid,
}

pub fn validate(form: Option<&FormSnapshot>) -> ValidationOutcome {
    let Some(form) = form else {
        return ValidationOutcome::NoForm;
    };

    let mut seen_ids: Vec<&str> = Vec::new();
    let mut missing: Vec<String> = Vec::new();

    for field in &form.fields {
        // Groups share an id; evaluate each id once, first occurrence wins.
        if seen_ids.contains(&field.id) {
            continue;
        }
        seen_ids.push(field.id);

        if !field.required || !field.value.is_missing() {
            continue;
        }
        let label = registry::label_for(field);
        if !missing.contains(&label) {
            missing.push(label);
        }
    }

    // The photo control is addressed by element id, not field name, so it is
    // checked on its own after the named fields.
    if form.photo.required && form.photo.file_name.is_none() {
        let label = registry::PHOTO_LABEL.to_string();
        if !missing.contains(&label) {
            missing.push(label);
        }
    }

    if missing.is_empty() {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Missing(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::{Field, FieldValue, PhotoField};

    fn filled_text(id: &'static str, value: &str) -> Field {
        Field::required(id, FieldValue::Text(value.to_string()))
    }

    #[test]
    fn absent_form_is_not_valid() {
        assert_eq!(validate(None), ValidationOutcome::NoForm);
        assert_ne!(validate(None), ValidationOutcome::Valid);
    }

    #[test]
    fn all_required_unfilled_yields_one_label_each() {
        let form = FormSnapshot {
            fields: vec![
                Field::required("last_name", FieldValue::Text(String::new())),
                Field::required("gender", FieldValue::RadioGroup(None)),
                Field::required("civil_status", FieldValue::Select(String::new())),
                Field::required("agreement", FieldValue::Checkbox(false)),
            ],
            photo: PhotoField::default(),
        };
        assert_eq!(
            validate(Some(&form)),
            ValidationOutcome::Missing(vec![
                "Last Name".to_string(),
                "Gender".to_string(),
                "Civil Status".to_string(),
                "Data Privacy Agreement".to_string(),
            ])
        );
    }

    #[test]
    fn radio_group_counts_once_no_matter_how_wide() {
        // Several inputs sharing one name arrive as repeated ids.
        let form = FormSnapshot {
            fields: vec![
                Field::required("gender", FieldValue::RadioGroup(None)),
                Field::required("gender", FieldValue::RadioGroup(None)),
                Field::required("gender", FieldValue::RadioGroup(None)),
            ],
            photo: PhotoField::default(),
        };
        assert_eq!(
            validate(Some(&form)),
            ValidationOutcome::Missing(vec!["Gender".to_string()])
        );
    }

    #[test]
    fn whitespace_only_text_is_missing() {
        let form = FormSnapshot {
            fields: vec![filled_text("last_name", "   ")],
            photo: PhotoField::default(),
        };
        assert_eq!(
            validate(Some(&form)),
            ValidationOutcome::Missing(vec!["Last Name".to_string()])
        );
    }

    #[test]
    fn optional_fields_never_flagged() {
        let form = FormSnapshot {
            fields: vec![
                filled_text("last_name", "Reyes"),
                Field::optional("middle_name", FieldValue::Text(String::new())),
                Field::optional("services", FieldValue::CheckboxGroup(vec![])),
            ],
            photo: PhotoField::default(),
        };
        assert_eq!(validate(Some(&form)), ValidationOutcome::Valid);
    }

    #[test]
    fn required_photo_without_file_flagged_last() {
        let form = FormSnapshot {
            fields: vec![
                filled_text("last_name", ""),
                Field::required("gender", FieldValue::RadioGroup(None)),
                filled_text("first_name", "Ana"),
            ],
            photo: PhotoField { required: true, file_name: None },
        };
        assert_eq!(
            validate(Some(&form)),
            ValidationOutcome::Missing(vec![
                "Last Name".to_string(),
                "Gender".to_string(),
                "2x2 Photo".to_string(),
            ])
        );
    }

    #[test]
    fn satisfied_photo_passes() {
        let form = FormSnapshot {
            fields: vec![filled_text("email", "a@b.com")],
            photo: PhotoField {
                required: true,
                file_name: Some("me.jpg".to_string()),
            },
        };
        assert_eq!(validate(Some(&form)), ValidationOutcome::Valid);
    }
}

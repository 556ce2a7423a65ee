//! Confirmation-summary rows. One row per unique named field in snapshot
//! order, photo last. Values are rendered through Yew text nodes, so free
//! text never reaches the page as markup.

use super::fields::FormSnapshot;
use super::registry;

/// One display line of the confirmation dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

pub fn build_summary(form: &FormSnapshot) -> Vec<SummaryRow> {
    let mut seen_ids: Vec<&str> = Vec::new();
    let mut rows: Vec<SummaryRow> = Vec::new();

    for field in &form.fields {
        if seen_ids.contains(&field.id) {
            continue;
        }
        seen_ids.push(field.id);
        rows.push(SummaryRow {
            label: registry::label_for(field),
            value: field.value.display(),
        });
    }

    // Photo row is appended unconditionally; the control has no field name
    // and is excluded from the enumeration above.
    rows.push(SummaryRow {
        label: registry::PHOTO_LABEL.to_string(),
        value: form.photo.display(),
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::{Field, FieldValue, PhotoField};
    use crate::form::validate::{validate, ValidationOutcome};

    fn sample_form() -> FormSnapshot {
        FormSnapshot {
            fields: vec![
                Field::required("last_name", FieldValue::Text("Reyes".to_string())),
                Field::required("email", FieldValue::Text("a@b.com".to_string())),
                Field::required("gender", FieldValue::RadioGroup(Some("Female".to_string()))),
                Field::optional(
                    "services",
                    FieldValue::CheckboxGroup(vec![
                        "Savings".to_string(),
                        "Loans".to_string(),
                    ]),
                ),
                Field::required("agreement", FieldValue::Checkbox(true)),
            ],
            photo: PhotoField {
                required: true,
                file_name: Some("photo.jpg".to_string()),
            },
        }
    }

    #[test]
    fn rows_follow_document_order_with_photo_last() {
        let labels: Vec<String> = build_summary(&sample_form())
            .into_iter()
            .map(|row| row.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Last Name",
                "Email Address",
                "Gender",
                "Preferred Services",
                "Data Privacy Agreement",
                "2x2 Photo",
            ]
        );
    }

    #[test]
    fn checkbox_group_joins_with_comma() {
        let rows = build_summary(&sample_form());
        let services = rows.iter().find(|r| r.label == "Preferred Services").unwrap();
        assert_eq!(services.value, "Savings, Loans");
    }

    #[test]
    fn empty_checkbox_group_is_none_sentinel() {
        let mut form = sample_form();
        form.fields[3].value = FieldValue::CheckboxGroup(vec![]);
        let rows = build_summary(&form);
        let services = rows.iter().find(|r| r.label == "Preferred Services").unwrap();
        assert_eq!(services.value, "none");
    }

    #[test]
    fn sentinels_for_unfilled_controls() {
        let form = FormSnapshot {
            fields: vec![
                Field::required("last_name", FieldValue::Text("  ".to_string())),
                Field::required("gender", FieldValue::RadioGroup(None)),
                Field::required("agreement", FieldValue::Checkbox(false)),
            ],
            photo: PhotoField::default(),
        };
        let values: Vec<String> = build_summary(&form).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["empty", "not selected", "No", "no file selected"]);
    }

    #[test]
    fn repeated_ids_collapse_to_first_occurrence() {
        let form = FormSnapshot {
            fields: vec![
                Field::required("gender", FieldValue::RadioGroup(Some("Male".to_string()))),
                Field::required("gender", FieldValue::RadioGroup(None)),
            ],
            photo: PhotoField::default(),
        };
        let rows = build_summary(&form);
        assert_eq!(rows.len(), 2); // gender + photo
        assert_eq!(rows[0].value, "Male");
    }

    #[test]
    fn idempotent_over_unchanged_snapshot() {
        let form = sample_form();
        assert_eq!(build_summary(&form), build_summary(&form));
    }

    #[test]
    fn every_flaggable_field_has_a_matching_summary_label() {
        // Label consistency: whatever the validator can report must show up
        // in the summary under the same text.
        let form = FormSnapshot {
            fields: vec![
                Field::required("last_name", FieldValue::Text(String::new())),
                Field::required("gender", FieldValue::RadioGroup(None)),
            ],
            photo: PhotoField { required: true, file_name: None },
        };
        let summary_labels: Vec<String> =
            build_summary(&form).into_iter().map(|r| r.label).collect();
        match validate(Some(&form)) {
            ValidationOutcome::Missing(flagged) => {
                for label in flagged {
                    assert!(summary_labels.contains(&label), "missing {label}");
                }
            }
            other => panic!("expected missing fields, got {other:?}"),
        }
    }
}

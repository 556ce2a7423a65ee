//! Static field-id to display-label table. Both the validator and the
//! summary builder resolve labels here, so a field flagged as missing always
//! matches its summary row.

use super::fields::Field;

/// Label for the photo control, which has no form field name.
pub const PHOTO_LABEL: &str = "2x2 Photo";

const LABELS: &[(&str, &str)] = &[
    ("last_name", "Last Name"),
    ("first_name", "First Name"),
    ("middle_name", "Middle Name"),
    ("email", "Email Address"),
    ("contact_number", "Contact Number"),
    ("address", "Home Address"),
    ("birth_date", "Date of Birth"),
    ("gender", "Gender"),
    ("civil_status", "Civil Status"),
    ("occupation", "Occupation"),
    ("services", "Preferred Services"),
    ("agreement", "Data Privacy Agreement"),
];

pub fn lookup(id: &str) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
}

/// Display label with fallback chain: registry entry, raw id, control kind.
pub fn label_for(field: &Field) -> String {
    if let Some(label) = lookup(field.id) {
        return label.to_string();
    }
    if !field.id.is_empty() {
        return field.id.to_string();
    }
    field.value.kind_name().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::FieldValue;

    #[test]
    fn known_id_resolves_to_label() {
        let field = Field::required("last_name", FieldValue::Text(String::new()));
        assert_eq!(label_for(&field), "Last Name");
    }

    #[test]
    fn unknown_id_falls_back_to_raw_id() {
        let field = Field::required("nickname", FieldValue::Text(String::new()));
        assert_eq!(label_for(&field), "nickname");
    }

    #[test]
    fn empty_id_falls_back_to_kind() {
        let field = Field::required("", FieldValue::RadioGroup(None));
        assert_eq!(label_for(&field), "choice");
    }
}

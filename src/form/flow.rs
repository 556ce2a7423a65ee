//! Submission flow state machine. Validation runs synchronously inside
//! `submit`, so the machine only ever rests in the four states below. No
//! network call happens anywhere in this flow; "submitted" is a UI state.

use super::fields::FormSnapshot;
use super::summary::{build_summary, SummaryRow};
use super::validate::{validate, ValidationOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// Waiting for a submit click.
    Idle,
    /// Missing-field labels shown in the incomplete dialog.
    Incomplete(Vec<String>),
    /// Summary rows shown in the confirm dialog, awaiting explicit consent.
    Confirming(Vec<SummaryRow>),
    /// Success banner showing; expires back to `Idle`.
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitFlow {
    state: FlowState,
}

impl Default for SubmitFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitFlow {
    pub fn new() -> Self {
        SubmitFlow { state: FlowState::Idle }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Submit click. Only acts from `Idle`; a submit while a dialog or the
    /// banner is up is ignored. An absent form leaves the flow in `Idle`:
    /// there was nothing to validate, which is not the same as passing.
    pub fn submit(&mut self, form: Option<&FormSnapshot>) {
        if self.state != FlowState::Idle {
            return;
        }
        self.state = match validate(form) {
            ValidationOutcome::NoForm => FlowState::Idle,
            ValidationOutcome::Missing(labels) => FlowState::Incomplete(labels),
            ValidationOutcome::Valid => match form {
                Some(form) => FlowState::Confirming(build_summary(form)),
                // validate() cannot return Valid without a form; keep the
                // machine honest anyway.
                None => FlowState::Idle,
            },
        };
    }

    /// Dialog dismissed without confirming. Nothing is recorded.
    pub fn dismiss(&mut self) {
        if matches!(self.state, FlowState::Incomplete(_) | FlowState::Confirming(_)) {
            self.state = FlowState::Idle;
        }
    }

    /// Explicit confirmation from the confirm dialog.
    pub fn confirm(&mut self) {
        if matches!(self.state, FlowState::Confirming(_)) {
            self.state = FlowState::Submitted;
        }
    }

    /// Success banner expired.
    pub fn acknowledge(&mut self) {
        if self.state == FlowState::Submitted {
            self.state = FlowState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::{Field, FieldValue, PhotoField};

    fn invalid_form() -> FormSnapshot {
        FormSnapshot {
            fields: vec![
                Field::required("last_name", FieldValue::Text(String::new())),
                Field::required("gender", FieldValue::RadioGroup(None)),
            ],
            photo: PhotoField { required: true, file_name: None },
        }
    }

    fn valid_form() -> FormSnapshot {
        FormSnapshot {
            fields: vec![
                Field::required("last_name", FieldValue::Text("Reyes".to_string())),
                Field::required("gender", FieldValue::RadioGroup(Some("Male".to_string()))),
                Field::required("email", FieldValue::Text("a@b.com".to_string())),
            ],
            photo: PhotoField {
                required: true,
                file_name: Some("id.png".to_string()),
            },
        }
    }

    #[test]
    fn incomplete_form_opens_incomplete_dialog_only() {
        let mut flow = SubmitFlow::new();
        flow.submit(Some(&invalid_form()));
        assert_eq!(
            *flow.state(),
            FlowState::Incomplete(vec![
                "Last Name".to_string(),
                "Gender".to_string(),
                "2x2 Photo".to_string(),
            ])
        );
        // Confirming is unreachable until the dialog is dismissed.
        flow.confirm();
        assert!(matches!(flow.state(), FlowState::Incomplete(_)));
        flow.dismiss();
        assert_eq!(*flow.state(), FlowState::Idle);
    }

    #[test]
    fn valid_form_reaches_confirm_with_summary() {
        let mut flow = SubmitFlow::new();
        flow.submit(Some(&valid_form()));
        match flow.state() {
            FlowState::Confirming(rows) => {
                let email = rows.iter().find(|r| r.label == "Email Address").unwrap();
                assert_eq!(email.value, "a@b.com");
            }
            other => panic!("expected confirming, got {other:?}"),
        }
    }

    #[test]
    fn confirm_then_banner_expiry_returns_to_idle() {
        let mut flow = SubmitFlow::new();
        flow.submit(Some(&valid_form()));
        flow.confirm();
        assert_eq!(*flow.state(), FlowState::Submitted);
        flow.acknowledge();
        assert_eq!(*flow.state(), FlowState::Idle);
    }

    #[test]
    fn dismissing_confirm_records_nothing() {
        let mut flow = SubmitFlow::new();
        flow.submit(Some(&valid_form()));
        flow.dismiss();
        assert_eq!(*flow.state(), FlowState::Idle);
        flow.acknowledge();
        assert_eq!(*flow.state(), FlowState::Idle);
    }

    #[test]
    fn missing_form_stays_idle() {
        let mut flow = SubmitFlow::new();
        flow.submit(None);
        assert_eq!(*flow.state(), FlowState::Idle);
    }

    #[test]
    fn submit_ignored_while_dialog_open() {
        let mut flow = SubmitFlow::new();
        flow.submit(Some(&invalid_form()));
        let before = flow.state().clone();
        flow.submit(Some(&valid_form()));
        assert_eq!(*flow.state(), before);
    }
}

//! The assessment record and its edit transitions
//!
//! Transitions never mutate in place. Each borrows the previous record and
//! returns the next one, so callers replace their copy wholesale and stale
//! references cannot observe half-applied edits.

use super::fields::{
    ChoiceValue, Field, ImportanceRating, InvestmentRange, Reason, ReasonSet, TextField,
    TimeCommitment,
};
use super::payload::AssessmentPayload;
use super::validate::{validate, ErrorMap};

/// One in-progress assessment.
///
/// Values live behind accessors so every edit goes through a transition and
/// keeps the error map reconciled with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    current_occupation: String,
    time_commitment: Option<TimeCommitment>,
    importance: Option<ImportanceRating>,
    reasons: ReasonSet,
    investment_range: Option<InvestmentRange>,
    errors: ErrorMap,
}

impl FormState {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::PhoneNumber => &self.phone_number,
            TextField::CurrentOccupation => &self.current_occupation,
        }
    }

    pub fn time_commitment(&self) -> Option<TimeCommitment> {
        self.time_commitment
    }

    pub fn importance(&self) -> Option<ImportanceRating> {
        self.importance
    }

    pub fn investment_range(&self) -> Option<InvestmentRange> {
        self.investment_range
    }

    pub fn reasons(&self) -> &ReasonSet {
        &self.reasons
    }

    /// Errors from the last failed submission, minus any cleared by edits
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The record with `value` stored verbatim in `field` and that field's
    /// error cleared. No trimming, no normalization.
    #[must_use]
    pub fn with_text(&self, field: TextField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            TextField::FirstName => next.first_name = value,
            TextField::LastName => next.last_name = value,
            TextField::Email => next.email = value,
            TextField::PhoneNumber => next.phone_number = value,
            TextField::CurrentOccupation => next.current_occupation = value,
        }
        next.errors.remove(field.field());
        next
    }

    /// The record with the single-choice field set.
    ///
    /// Selection is absolute; re-selecting the current option does not
    /// toggle it off.
    #[must_use]
    pub fn with_choice(&self, choice: ChoiceValue) -> Self {
        let mut next = self.clone();
        match choice {
            ChoiceValue::TimeCommitment(value) => next.time_commitment = Some(value),
            ChoiceValue::Importance(value) => next.importance = Some(value),
            ChoiceValue::InvestmentRange(value) => next.investment_range = Some(value),
        }
        next.errors.remove(choice.field());
        next
    }

    /// The record with `reason` toggled to `checked` (see
    /// [`ReasonSet::toggled`] for the "none" exclusivity) and the reasons
    /// error cleared.
    #[must_use]
    pub fn with_reason(&self, reason: Reason, checked: bool) -> Self {
        let mut next = self.clone();
        next.reasons = self.reasons.toggled(reason, checked);
        next.errors.remove(Field::Reasons);
        next
    }

    /// The record with a freshly computed error map installed wholesale.
    /// Values are untouched.
    #[must_use]
    pub fn with_errors(&self, errors: ErrorMap) -> Self {
        let mut next = self.clone();
        next.errors = errors;
        next
    }

    /// Re-validate the whole record, then either build the outbound payload
    /// or hand back the full error map for [`FormState::with_errors`].
    ///
    /// Does not mutate; installing the errors is the caller's move.
    pub fn finalize(&self) -> Result<AssessmentPayload, ErrorMap> {
        let errors = validate(self);
        match (self.time_commitment, self.importance, self.investment_range) {
            (Some(time_commitment), Some(importance), Some(investment_range))
                if errors.is_empty() =>
            {
                Ok(AssessmentPayload {
                    first_name: self.first_name.clone(),
                    last_name: self.last_name.clone(),
                    email: self.email.clone(),
                    phone_number: self.phone_number.clone(),
                    current_occupation: self.current_occupation.clone(),
                    time_commitment,
                    importance,
                    reasons: self.reasons.clone(),
                    investment_range,
                })
            }
            _ => Err(errors),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_reasons_unchecked(&self, reasons: ReasonSet) -> Self {
        let mut next = self.clone();
        next.reasons = reasons;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        FormState::default()
            .with_text(TextField::FirstName, "Grace")
            .with_text(TextField::LastName, "Hopper")
            .with_text(TextField::Email, "grace@example.com")
            .with_text(TextField::PhoneNumber, "555-0100")
            .with_text(TextField::CurrentOccupation, "Rear Admiral")
            .with_choice(ChoiceValue::TimeCommitment(TimeCommitment::Five))
            .with_choice(ChoiceValue::Importance(ImportanceRating::Five))
            .with_reason(Reason::CareerAdvancement, true)
            .with_choice(ChoiceValue::InvestmentRange(InvestmentRange::From2500To3000))
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn test_default_record_is_pristine() {
            let form = FormState::default();
            for field in TextField::ALL {
                assert_eq!(form.text(field), "");
            }
            assert!(form.time_commitment().is_none());
            assert!(form.importance().is_none());
            assert!(form.investment_range().is_none());
            assert!(form.reasons().is_empty());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_transitions_leave_the_original_alone() {
            let original = FormState::default();
            let _edited = original
                .with_text(TextField::FirstName, "Grace")
                .with_choice(ChoiceValue::Importance(ImportanceRating::Three))
                .with_reason(Reason::None, true);
            assert_eq!(original, FormState::default());
        }
    }

    mod transitions {
        use super::*;

        #[test]
        fn test_with_text_stores_verbatim() {
            let form = FormState::default().with_text(TextField::FirstName, "  Grace  ");
            assert_eq!(form.text(TextField::FirstName), "  Grace  ");
        }

        #[test]
        fn test_with_text_clears_only_that_fields_error() {
            let form = FormState::default();
            let form = form.with_errors(validate(&form));
            assert!(form.errors().contains(Field::FirstName));
            assert!(form.errors().contains(Field::LastName));

            let form = form.with_text(TextField::FirstName, "G");
            assert!(!form.errors().contains(Field::FirstName));
            assert!(form.errors().contains(Field::LastName));
        }

        #[test]
        fn test_with_text_clearing_runs_even_for_empty_value() {
            // Clearing is tied to the edit, not to the new value's validity.
            let form = FormState::default();
            let form = form.with_errors(validate(&form));
            let form = form.with_text(TextField::Email, "");
            assert!(!form.errors().contains(Field::Email));
        }

        #[test]
        fn test_with_choice_sets_and_clears() {
            let form = FormState::default();
            let form = form.with_errors(validate(&form));
            let form = form.with_choice(ChoiceValue::TimeCommitment(TimeCommitment::One));
            assert_eq!(form.time_commitment(), Some(TimeCommitment::One));
            assert!(!form.errors().contains(Field::TimeCommitment));
            assert!(form.errors().contains(Field::Importance));
        }

        #[test]
        fn test_with_choice_is_absolute() {
            let form = FormState::default()
                .with_choice(ChoiceValue::Importance(ImportanceRating::Two))
                .with_choice(ChoiceValue::Importance(ImportanceRating::Two));
            assert_eq!(form.importance(), Some(ImportanceRating::Two));
        }

        #[test]
        fn test_with_reason_clears_reasons_error() {
            let form = FormState::default();
            let form = form.with_errors(validate(&form));
            let form = form.with_reason(Reason::Entrepreneurship, true);
            assert!(!form.errors().contains(Field::Reasons));
            assert!(form.reasons().contains(Reason::Entrepreneurship));
        }

        #[test]
        fn test_with_errors_keeps_values() {
            let form = valid_form().with_text(TextField::Email, "broken");
            let errors = validate(&form);
            let form = form.with_errors(errors);
            assert_eq!(form.text(TextField::Email), "broken");
            assert_eq!(form.text(TextField::FirstName), "Grace");
            assert_eq!(form.importance(), Some(ImportanceRating::Five));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_finalize_on_valid_record_builds_payload() {
            let payload = valid_form().finalize().unwrap();
            assert_eq!(payload.first_name, "Grace");
            assert_eq!(payload.last_name, "Hopper");
            assert_eq!(payload.email, "grace@example.com");
            assert_eq!(payload.phone_number, "555-0100");
            assert_eq!(payload.current_occupation, "Rear Admiral");
            assert_eq!(payload.time_commitment, TimeCommitment::Five);
            assert_eq!(payload.importance, ImportanceRating::Five);
            assert!(payload.reasons.contains(Reason::CareerAdvancement));
            assert_eq!(payload.investment_range, InvestmentRange::From2500To3000);
        }

        #[test]
        fn test_finalize_on_empty_record_returns_every_error() {
            let errors = FormState::default().finalize().unwrap_err();
            assert_eq!(errors.len(), Field::ALL.len());
        }

        #[test]
        fn test_finalize_does_not_mutate() {
            let form = FormState::default();
            let _ = form.finalize();
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_failed_submission_keeps_every_value() {
            let form = valid_form().with_text(TextField::LastName, "");
            let errors = form.finalize().unwrap_err();
            let form = form.with_errors(errors);
            assert_eq!(form.text(TextField::FirstName), "Grace");
            assert_eq!(form.text(TextField::LastName), "");
            assert_eq!(form.time_commitment(), Some(TimeCommitment::Five));
            assert!(form.reasons().contains(Reason::CareerAdvancement));
            assert_eq!(form.errors().first_field(), Some(Field::LastName));
        }

        #[test]
        fn test_conflicting_reasons_block_finalize() {
            let conflicted: ReasonSet =
                [Reason::None, Reason::CareerChange].into_iter().collect();
            let errors = valid_form()
                .with_reasons_unchecked(conflicted)
                .finalize()
                .unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.first_field(), Some(Field::Reasons));
        }
    }
}

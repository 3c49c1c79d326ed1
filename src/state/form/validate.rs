//! Pure validation over the assessment record

use std::collections::BTreeMap;

use super::fields::{Field, TextField};
use super::form_state::FormState;

/// Field -> human-readable message from the last validation pass.
///
/// A field is present only while it is considered invalid, and holds at most
/// one message. Iteration order follows [`Field::ALL`], so the first entry is
/// the top-most invalid field on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, &'static str>);

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[allow(dead_code)]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Top-most invalid field, in form order
    pub fn first_field(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }
}

/// Validate the whole record.
///
/// Pure: no I/O, no mutation. Every rule is evaluated independently and the
/// first failing rule per field wins.
pub fn validate(form: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::default();

    for text in TextField::ALL {
        if form.text(text).is_empty() {
            errors.insert(text.field(), required_message(text.field()));
        }
    }

    let email = form.text(TextField::Email);
    if !email.is_empty() && !is_plausible_email(email) {
        errors.insert(Field::Email, "Invalid email address");
    }

    if form.time_commitment().is_none() {
        errors.insert(Field::TimeCommitment, required_message(Field::TimeCommitment));
    }
    if form.importance().is_none() {
        errors.insert(Field::Importance, required_message(Field::Importance));
    }

    let reasons = form.reasons();
    if reasons.is_empty() {
        errors.insert(Field::Reasons, required_message(Field::Reasons));
    } else if reasons.conflicts_with_none() {
        // Unreachable through the toggle transition; guarded here anyway.
        errors.insert(Field::Reasons, "\"None\" cannot be combined with other reasons");
    }

    if form.investment_range().is_none() {
        errors.insert(Field::InvestmentRange, required_message(Field::InvestmentRange));
    }

    errors
}

fn required_message(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First name is required",
        Field::LastName => "Last name is required",
        Field::Email => "Email is required",
        Field::PhoneNumber => "Phone number is required",
        Field::CurrentOccupation => "Current occupation is required",
        Field::TimeCommitment => "Please select your weekly time commitment",
        Field::Importance => "Please rate the importance",
        Field::Reasons => "Please select at least one reason",
        Field::InvestmentRange => "Please select your investment range",
    }
}

/// Plausibility only: something before the '@', a dot inside the domain.
/// Full address validation is out of scope for a survey form.
fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

//! Form domain layer
//!
//! The assessment record, its edit transitions, pure validation and the
//! outbound payload. Everything here is side-effect free; the app layer owns
//! the record and replaces it transition by transition.

mod fields;
mod form_state;
mod payload;
mod validate;

pub use fields::{
    ChoiceValue, Field, ImportanceRating, InvestmentRange, Reason, ReasonSet, TextField,
    TimeCommitment,
};
pub use form_state::FormState;
pub use payload::AssessmentPayload;
pub use validate::{validate, ErrorMap};

//! Outbound payload for a validated assessment

use serde::{Deserialize, Serialize};

use super::fields::{ImportanceRating, InvestmentRange, ReasonSet, TimeCommitment};

/// Exactly what leaves the form on a successful submission.
///
/// Key spellings and option ids are the external contract; the serde renames
/// on the option enums produce the wire spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub current_occupation: String,
    pub time_commitment: TimeCommitment,
    pub importance: ImportanceRating,
    pub reasons: ReasonSet,
    pub investment_range: InvestmentRange,
}

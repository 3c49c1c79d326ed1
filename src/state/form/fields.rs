//! Field identifiers and typed option values for the assessment form

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifies one field of the assessment form.
///
/// `name()` spellings are the outbound payload contract. The variant order is
/// the form's top-to-bottom order, and the error map sorts by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CurrentOccupation,
    TimeCommitment,
    Importance,
    Reasons,
    InvestmentRange,
}

impl Field {
    /// Every field, in form order (top to bottom)
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::CurrentOccupation,
        Field::TimeCommitment,
        Field::Importance,
        Field::Reasons,
        Field::InvestmentRange,
    ];

    /// Canonical field name as it appears in the submission payload
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::CurrentOccupation => "currentOccupation",
            Field::TimeCommitment => "timeCommitment",
            Field::Importance => "importance",
            Field::Reasons => "reasons",
            Field::InvestmentRange => "investmentRange",
        }
    }

    /// The text-subset id, when this is a free-text field
    pub fn as_text(self) -> Option<TextField> {
        match self {
            Field::FirstName => Some(TextField::FirstName),
            Field::LastName => Some(TextField::LastName),
            Field::Email => Some(TextField::Email),
            Field::PhoneNumber => Some(TextField::PhoneNumber),
            Field::CurrentOccupation => Some(TextField::CurrentOccupation),
            _ => None,
        }
    }

    /// Label rendered above the field
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::CurrentOccupation => "Current Occupation",
            Field::TimeCommitment => "Weekly Time Commitment",
            Field::Importance => "Importance of Enrolling in the Coaching Program",
            Field::Reasons => "Reason for Enrolling in the Coaching Program",
            Field::InvestmentRange => "Investment Range",
        }
    }
}

/// The free-text subset of [`Field`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CurrentOccupation,
}

impl TextField {
    pub const ALL: [TextField; 5] = [
        TextField::FirstName,
        TextField::LastName,
        TextField::Email,
        TextField::PhoneNumber,
        TextField::CurrentOccupation,
    ];

    pub fn field(self) -> Field {
        match self {
            TextField::FirstName => Field::FirstName,
            TextField::LastName => Field::LastName,
            TextField::Email => Field::Email,
            TextField::PhoneNumber => Field::PhoneNumber,
            TextField::CurrentOccupation => Field::CurrentOccupation,
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            TextField::FirstName => "Enter your first name",
            TextField::LastName => "Enter your last name",
            TextField::Email => "Enter your email",
            TextField::PhoneNumber => "Enter your phone number",
            TextField::CurrentOccupation => "Enter your current role",
        }
    }
}

/// Weekly hours the respondent is willing to commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeCommitment {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "5")]
    Five,
}

impl TimeCommitment {
    pub const ALL: [TimeCommitment; 3] =
        [TimeCommitment::Zero, TimeCommitment::One, TimeCommitment::Five];

    /// Contract spelling ("0", "1" or "5")
    #[allow(dead_code)]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeCommitment::Zero => "0",
            TimeCommitment::One => "1",
            TimeCommitment::Five => "5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeCommitment::Zero => "0 hours (I do not have time)",
            TimeCommitment::One => "1 hour (Time investment insufficient)",
            TimeCommitment::Five => "5 hours (Recommended)",
        }
    }

    /// Keyboard shortcut: the option ids are literal digits
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(TimeCommitment::Zero),
            '1' => Some(TimeCommitment::One),
            '5' => Some(TimeCommitment::Five),
            _ => None,
        }
    }
}

/// 1-5 rating of how much enrolling matters to the respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImportanceRating {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl ImportanceRating {
    pub const ALL: [ImportanceRating; 5] = [
        ImportanceRating::One,
        ImportanceRating::Two,
        ImportanceRating::Three,
        ImportanceRating::Four,
        ImportanceRating::Five,
    ];

    /// Contract spelling ("1" through "5")
    pub fn as_str(self) -> &'static str {
        match self {
            ImportanceRating::One => "1",
            ImportanceRating::Two => "2",
            ImportanceRating::Three => "3",
            ImportanceRating::Four => "4",
            ImportanceRating::Five => "5",
        }
    }

    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(ImportanceRating::One),
            '2' => Some(ImportanceRating::Two),
            '3' => Some(ImportanceRating::Three),
            '4' => Some(ImportanceRating::Four),
            '5' => Some(ImportanceRating::Five),
            _ => None,
        }
    }
}

/// Why the respondent wants to enroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "career-change")]
    CareerChange,
    #[serde(rename = "career-advancement")]
    CareerAdvancement,
    #[serde(rename = "entrepreneurship")]
    Entrepreneurship,
}

impl Reason {
    pub const ALL: [Reason; 4] = [
        Reason::None,
        Reason::CareerChange,
        Reason::CareerAdvancement,
        Reason::Entrepreneurship,
    ];

    /// Contract spelling of the reason id
    #[allow(dead_code)]
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::None => "none",
            Reason::CareerChange => "career-change",
            Reason::CareerAdvancement => "career-advancement",
            Reason::Entrepreneurship => "entrepreneurship",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Reason::None => "None (Will not be accepted)",
            Reason::CareerChange => "Change Career",
            Reason::CareerAdvancement => "Career Advancement",
            Reason::Entrepreneurship => "Explore AI Entrepreneurship",
        }
    }
}

/// How much the respondent is willing to invest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestmentRange {
    #[serde(rename = "0-2500")]
    UpTo2500,
    #[serde(rename = "2500-3000")]
    From2500To3000,
    #[serde(rename = "3500+")]
    From3500,
}

impl InvestmentRange {
    pub const ALL: [InvestmentRange; 3] = [
        InvestmentRange::UpTo2500,
        InvestmentRange::From2500To3000,
        InvestmentRange::From3500,
    ];

    /// Contract spelling of the range id
    #[allow(dead_code)]
    pub fn as_str(self) -> &'static str {
        match self {
            InvestmentRange::UpTo2500 => "0-2500",
            InvestmentRange::From2500To3000 => "2500-3000",
            InvestmentRange::From3500 => "3500+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvestmentRange::UpTo2500 => "$0 - $2,500 (I do not value investing in myself)",
            InvestmentRange::From2500To3000 => "$2,500 - $3,000",
            InvestmentRange::From3500 => "$3,500+ (Most Recommended)",
        }
    }

    /// Keyboard shortcut: ordinal position, '1' through '3'
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(InvestmentRange::UpTo2500),
            '2' => Some(InvestmentRange::From2500To3000),
            '3' => Some(InvestmentRange::From3500),
            _ => None,
        }
    }
}

/// A single-choice selection paired with the field it belongs to.
///
/// Writing the wrong option into a field is unrepresentable: the value
/// carries its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceValue {
    TimeCommitment(TimeCommitment),
    Importance(ImportanceRating),
    InvestmentRange(InvestmentRange),
}

impl ChoiceValue {
    /// The field this choice writes to
    pub fn field(self) -> Field {
        match self {
            ChoiceValue::TimeCommitment(_) => Field::TimeCommitment,
            ChoiceValue::Importance(_) => Field::Importance,
            ChoiceValue::InvestmentRange(_) => Field::InvestmentRange,
        }
    }
}

/// The reasons multi-select.
///
/// "none" is exclusive: whenever it is a member it is the sole member.
/// [`ReasonSet::toggled`] maintains that invariant; validation re-checks it
/// independently for records built some other way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReasonSet(BTreeSet<Reason>);

impl ReasonSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, reason: Reason) -> bool {
        self.0.contains(&reason)
    }

    /// True when "none" shares the set with other reasons
    pub fn conflicts_with_none(&self) -> bool {
        self.contains(Reason::None) && self.0.len() > 1
    }

    /// The set after toggling `reason` to `checked`.
    ///
    /// Checking "none" replaces the whole set with `{none}`. Checking any
    /// other reason while "none" is present drops "none" (and anything with
    /// it) in favor of the new reason. Unchecking an absent reason is a
    /// no-op.
    #[must_use]
    pub fn toggled(&self, reason: Reason, checked: bool) -> Self {
        let mut members = self.0.clone();
        if checked {
            if reason == Reason::None || members.contains(&Reason::None) {
                members.clear();
            }
            members.insert(reason);
        } else {
            members.remove(&reason);
        }
        Self(members)
    }
}

impl FromIterator<Reason> for ReasonSet {
    /// Collects members verbatim. Exclusivity is the toggle's job, and
    /// validation guards against sets built around it.
    fn from_iter<I: IntoIterator<Item = Reason>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

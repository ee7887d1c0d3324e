//! Identity matching against the roster and classification of the result.

mod normalizer;

pub use normalizer::normalize;

use crate::roster::{CandidateRecord, Outcome};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Form field carrying one part of the identity triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    StudentId,
}

impl Field {
    pub const fn ordered() -> [Self; 3] {
        [Self::Name, Self::Email, Self::StudentId]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::StudentId => "student ID",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity triple typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub student_id: String,
}

impl Submission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            student_id: student_id.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::StudentId => &self.student_id,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::StudentId => &mut self.student_id,
        };
        *slot = value.into();
    }

    /// Every field must carry visible text before a search may start.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<Field> = Field::ordered()
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Raised at the input boundary when any required field is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("all fields are required (missing: {})", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Normalized identity triple used as the match key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    name: String,
    email: String,
    student_id: String,
}

impl IdentityKey {
    pub fn new(name: &str, email: &str, student_id: &str) -> Self {
        Self {
            name: normalize(name),
            email: normalize(email),
            student_id: normalize(student_id),
        }
    }

    pub fn from_record(record: &CandidateRecord) -> Self {
        Self::new(&record.name, &record.email, &record.student_id)
    }

    pub fn from_submission(submission: &Submission) -> Self {
        Self::new(&submission.name, &submission.email, &submission.student_id)
    }
}

/// Result of matching one submission against the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "record", rename_all = "snake_case")]
pub enum LookupResult {
    NotFound,
    Matched(CandidateRecord),
}

impl LookupResult {
    pub fn verdict(&self) -> Verdict {
        match self {
            LookupResult::NotFound => Verdict::NotFound,
            LookupResult::Matched(record) => match record.outcome {
                Outcome::Admitted => Verdict::Admitted,
                Outcome::NotAdmitted => Verdict::NotAdmitted,
            },
        }
    }

    pub fn record(&self) -> Option<&CandidateRecord> {
        match self {
            LookupResult::NotFound => None,
            LookupResult::Matched(record) => Some(record),
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.record().map(|record| record.outcome)
    }
}

/// Classified lookup result that selects the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    NotFound,
    Admitted,
    NotAdmitted,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotFound => "not-found",
            Self::Admitted => "admitted",
            Self::NotAdmitted => "not-admitted",
        }
    }
}

/// Scan `roster` in order and return the first record whose normalized name,
/// email and student ID all equal the submission's.
pub fn lookup(submission: &Submission, roster: &[CandidateRecord]) -> LookupResult {
    first_match(
        submission,
        roster
            .iter()
            .map(|record| (IdentityKey::from_record(record), record)),
    )
}

/// The single matching rule: first candidate, in iteration order, whose key
/// equals the submission's key. Keys may be precomputed or built on the fly.
pub(crate) fn first_match<'a, K, I>(submission: &Submission, candidates: I) -> LookupResult
where
    K: Borrow<IdentityKey>,
    I: IntoIterator<Item = (K, &'a CandidateRecord)>,
{
    let key = IdentityKey::from_submission(submission);
    candidates
        .into_iter()
        .find(|(candidate, _)| *candidate.borrow() == key)
        .map_or(LookupResult::NotFound, |(_, record)| {
            LookupResult::Matched(record.clone())
        })
}

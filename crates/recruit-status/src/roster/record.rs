use serde::{Deserialize, Serialize};

/// Admission outcome attached to a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Admitted,
    NotAdmitted,
}

impl Outcome {
    /// Fail-closed reading of a raw status value: only the exact passing
    /// marker admits.
    pub fn from_status(status: &str, passing_marker: &str) -> Self {
        if status == passing_marker {
            Self::Admitted
        } else {
            Self::NotAdmitted
        }
    }
}

/// One registered applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub outcome: Outcome,
}

impl CandidateRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        student_id: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            student_id: student_id.into(),
            outcome,
        }
    }

    pub fn is_admitted(&self) -> bool {
        self.outcome == Outcome::Admitted
    }
}

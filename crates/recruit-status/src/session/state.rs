use crate::lookup::{LookupResult, Submission, Verdict};
use crate::roster::{CandidateRecord, Outcome};
use serde::Serialize;

/// Identifies one submitted search. A reset or a newer submission makes older
/// tickets stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SearchTicket(pub(crate) u64);

impl SearchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Screen currently shown by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DisplayState {
    Idle,
    Searching {
        ticket: SearchTicket,
        progress: u8,
        submission: Submission,
    },
    NotFound,
    Accepted {
        record: CandidateRecord,
    },
    Rejected {
        record: CandidateRecord,
    },
}

impl DisplayState {
    pub(crate) fn from_result(result: LookupResult) -> Self {
        match result {
            LookupResult::NotFound => Self::NotFound,
            LookupResult::Matched(record) => match record.outcome {
                Outcome::Admitted => Self::Accepted { record },
                Outcome::NotAdmitted => Self::Rejected { record },
            },
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Searching { .. } => "searching",
            Self::NotFound => "not_found",
            Self::Accepted { .. } => "accepted",
            Self::Rejected { .. } => "rejected",
        }
    }

    /// The verdict behind a terminal screen.
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Self::NotFound => Some(Verdict::NotFound),
            Self::Accepted { .. } => Some(Verdict::Admitted),
            Self::Rejected { .. } => Some(Verdict::NotAdmitted),
            Self::Idle | Self::Searching { .. } => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.verdict().is_some()
    }

    /// Screens from which an edit drops back to the idle form.
    pub fn is_error_display(&self) -> bool {
        matches!(self, Self::NotFound | Self::Rejected { .. })
    }

    /// The form is visible and may be submitted.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::NotFound)
    }
}

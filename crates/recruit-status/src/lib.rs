//! Recruitment status lookup: a static roster, an identity matcher, and the
//! session lifecycle that turns a submitted triple into one result screen.

pub mod config;
pub mod error;
pub mod lookup;
pub mod roster;
pub mod session;
pub mod telemetry;

pub use lookup::{lookup, normalize, LookupResult, Submission, ValidationError, Verdict};
pub use roster::{CandidateRecord, Outcome, RosterStore};
pub use session::{Cue, DisplayState, Notifier, SearchTicket, Session, SessionError};

//! Form session: the explicit state container behind the status screens.
//!
//! A session owns the typed form values and the current [`DisplayState`].
//! Submitting snapshots the form and hands back a [`SearchTicket`]; the result
//! is applied later through [`Session::resolve`], and only if that ticket is
//! still current. [`search::SearchDriver`] runs the simulated delay in between.

mod notifier;
pub mod search;
mod state;

pub use notifier::{Cue, Notifier, NullNotifier};
pub use search::SearchDriver;
pub use state::{DisplayState, SearchTicket};

use crate::lookup::{Field, LookupResult, Submission, ValidationError, Verdict};
use crate::roster::RosterStore;
use std::sync::Arc;
use tracing::{debug, info};

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a search is already in progress")]
    SearchInFlight,
    #[error("a {} result is on screen; reset before searching again", .0.label())]
    ResultDisplayed(Verdict),
}

pub struct Session<N> {
    roster: Arc<RosterStore>,
    notifier: Arc<N>,
    form: Submission,
    state: DisplayState,
    sequence: u64,
}

impl<N> Session<N>
where
    N: Notifier + 'static,
{
    pub fn new(roster: Arc<RosterStore>, notifier: Arc<N>) -> Self {
        Self {
            roster,
            notifier,
            form: Submission::default(),
            state: DisplayState::Idle,
            sequence: 0,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn form(&self) -> &Submission {
        &self.form
    }

    pub fn progress(&self) -> Option<u8> {
        match &self.state {
            DisplayState::Searching { progress, .. } => Some(*progress),
            _ => None,
        }
    }

    /// Update one form field. Typed values survive; an error screen gives way
    /// to the idle form. Edits during a search do not touch the snapshot
    /// being searched.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
        self.notifier.notify(Cue::Keystroke);

        if self.state.is_error_display() {
            debug!(from = self.state.label(), "edit returned session to idle");
            self.state = DisplayState::Idle;
        }
    }

    /// Start a search for the current form values.
    pub fn submit(&mut self) -> Result<SearchTicket, SessionError> {
        if let DisplayState::Searching { .. } = self.state {
            return Err(SessionError::SearchInFlight);
        }
        if !self.state.accepts_submit() {
            if let Some(verdict) = self.state.verdict() {
                return Err(SessionError::ResultDisplayed(verdict));
            }
        }

        self.notifier.notify(Cue::Click);
        self.form.validate()?;

        self.sequence += 1;
        let ticket = SearchTicket(self.sequence);
        self.state = DisplayState::Searching {
            ticket,
            progress: 0,
            submission: self.form.clone(),
        };
        info!(ticket = ticket.sequence(), "search started");
        Ok(ticket)
    }

    /// Advance the progress counter of a running search. Returns `None` when
    /// the ticket has been superseded.
    pub fn tick(&mut self, ticket: SearchTicket, increment: u8) -> Option<u8> {
        match &mut self.state {
            DisplayState::Searching {
                ticket: current,
                progress,
                ..
            } if *current == ticket => {
                *progress = progress.saturating_add(increment).min(MAX_PROGRESS);
                let value = *progress;
                self.notifier.notify(Cue::Scan);
                Some(value)
            }
            _ => None,
        }
    }

    /// Run the lookup for a search whose delay has elapsed and move to the
    /// matching result screen. Stale tickets are ignored and return `None`.
    pub fn resolve(&mut self, ticket: SearchTicket) -> Option<LookupResult> {
        let submission = match &self.state {
            DisplayState::Searching {
                ticket: current,
                submission,
                ..
            } if *current == ticket => submission.clone(),
            _ => {
                debug!(ticket = ticket.sequence(), "discarding superseded search");
                return None;
            }
        };

        let result = self.roster.lookup(&submission);
        let verdict = result.verdict();
        self.notifier.notify(match verdict {
            Verdict::Admitted => Cue::Success,
            Verdict::NotAdmitted | Verdict::NotFound => Cue::Error,
        });
        info!(
            ticket = ticket.sequence(),
            verdict = verdict.label(),
            "search resolved"
        );

        self.state = DisplayState::from_result(result.clone());
        Some(result)
    }

    /// Clear the form and return to idle from any state. A search still
    /// running is superseded.
    pub fn reset(&mut self) {
        self.notifier.notify(Cue::Click);
        self.sequence += 1;
        self.form = Submission::default();
        self.state = DisplayState::Idle;
        debug!("session reset");
    }
}

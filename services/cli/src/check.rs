use crate::cli::SessionArgs;
use crate::notifier::TerminalNotifier;
use crate::render;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use recruit_status::config::{AppConfig, SearchConfig};
use recruit_status::error::AppError;
use recruit_status::lookup::Field;
use recruit_status::session::SearchDriver;
use recruit_status::{
    CandidateRecord, DisplayState, LookupResult, RosterStore, SearchTicket, Session, Verdict,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) session: SessionArgs,
    /// Full name as registered
    #[arg(long)]
    pub(crate) name: String,
    /// Registered email address
    #[arg(long)]
    pub(crate) email: String,
    /// Student ID (NIM)
    #[arg(long)]
    pub(crate) student_id: String,
    /// Print the verdict as JSON instead of a result screen
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<CandidateRecord>,
}

/// A loaded roster plus the session and search timing bound to it.
pub(crate) struct Console {
    pub(crate) session: Mutex<Session<TerminalNotifier>>,
    driver: SearchDriver,
}

impl Console {
    pub(crate) fn open(args: SessionArgs, mut config: AppConfig) -> Result<Self, AppError> {
        let SessionArgs {
            roster,
            instant,
            bell,
        } = args;
        roster.apply(&mut config);

        let store = Arc::new(RosterStore::load(&config.roster)?);
        info!(
            records = store.len(),
            environment = ?config.environment,
            "roster ready"
        );

        let search = if instant {
            SearchConfig::instant()
        } else {
            config.search
        };

        Ok(Self {
            session: Mutex::new(Session::new(store, Arc::new(TerminalNotifier::new(bell)))),
            driver: SearchDriver::new(search),
        })
    }

    /// Wait out the simulated search for `ticket` and return the final state.
    pub(crate) async fn search(
        &self,
        ticket: SearchTicket,
        show_progress: bool,
    ) -> Option<(LookupResult, DisplayState)> {
        let mut rng = StdRng::from_entropy();
        let result = self
            .driver
            .run(&self.session, ticket, &mut rng, |progress| {
                if show_progress {
                    render::progress(progress);
                }
            })
            .await;
        if show_progress {
            render::progress_done();
        }

        let state = self.session.lock().await.state().clone();
        result.map(|result| (result, state))
    }
}

pub(crate) async fn run_check(args: CheckArgs, config: AppConfig) -> Result<(), AppError> {
    let CheckArgs {
        session,
        name,
        email,
        student_id,
        json,
    } = args;

    let console = Console::open(session, config)?;
    let ticket = {
        let mut session = console.session.lock().await;
        session.edit(Field::Name, name);
        session.edit(Field::Email, email);
        session.edit(Field::StudentId, student_id);
        session.submit()?
    };

    let Some((result, state)) = console.search(ticket, !json).await else {
        return Ok(());
    };

    if json {
        let output = CheckOutput {
            verdict: result.verdict(),
            record: result.record().cloned(),
        };
        let body = serde_json::to_string_pretty(&output)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{body}");
    } else {
        render::screen(&state);
    }

    Ok(())
}

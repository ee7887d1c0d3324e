use crate::check::{run_check, CheckArgs};
use crate::interactive::run_interactive;
use crate::render;
use clap::{Args, Parser, Subcommand};
use recruit_status::config::AppConfig;
use recruit_status::error::AppError;
use recruit_status::telemetry;
use recruit_status::RosterStore;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "recruit-status",
    about = "Check a recruitment result against the candidate roster",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for name, email and student ID, then show the result (default command)
    Interactive(SessionArgs),
    /// Look up a single identity given on the command line
    Check(CheckArgs),
    /// Load the roster and print totals per outcome
    Roster(RosterArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct RosterArgs {
    /// Roster file (.json or .csv); defaults to the embedded roster
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Status value that counts as admitted
    #[arg(long)]
    pub(crate) passing_marker: Option<String>,
}

impl RosterArgs {
    pub(crate) fn apply(self, config: &mut AppConfig) {
        if let Some(path) = self.roster {
            config.roster.path = Some(path);
        }
        if let Some(marker) = self.passing_marker.filter(|marker| !marker.is_empty()) {
            config.roster.passing_marker = marker;
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct SessionArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Skip the simulated search delay
    #[arg(long)]
    pub(crate) instant: bool,
    /// Ring the terminal bell on results
    #[arg(long)]
    pub(crate) bell: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Interactive(SessionArgs::default()));

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Interactive(args) => run_interactive(args, config).await,
        Command::Check(args) => run_check(args, config).await,
        Command::Roster(args) => {
            args.apply(&mut config);
            let store = RosterStore::load(&config.roster)?;
            render::roster_summary(&store.summary());
            Ok(())
        }
    }
}

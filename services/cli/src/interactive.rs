use crate::check::Console;
use crate::cli::SessionArgs;
use crate::render;
use recruit_status::config::AppConfig;
use recruit_status::error::AppError;
use recruit_status::lookup::Field;
use recruit_status::{DisplayState, SessionError};
use std::io::{self, BufRead, Write};

/// Fields in the order the form shows them.
const FORM_ORDER: [Field; 3] = [Field::Email, Field::Name, Field::StudentId];

pub(crate) async fn run_interactive(args: SessionArgs, config: AppConfig) -> Result<(), AppError> {
    let console = Console::open(args, config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("SSH://RECRUIT_SERVER/LOGIN  (empty input keeps the current value, Ctrl-D quits)");

    loop {
        for field in FORM_ORDER {
            let current = console.session.lock().await.form().field(field).to_string();
            let Some(value) = read_field(&mut input, field, &current)? else {
                return Ok(());
            };
            if value != current {
                console.session.lock().await.edit(field, value);
            }
        }

        let submitted = console.session.lock().await.submit();
        let ticket = match submitted {
            Ok(ticket) => ticket,
            Err(SessionError::Validation(err)) => {
                println!("! {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let Some((_, state)) = console.search(ticket, true).await else {
            continue;
        };
        render::screen(&state);

        let question = match state {
            DisplayState::NotFound => "Edit and search again? [y/N] ",
            _ => "Start a new lookup? [y/N] ",
        };
        if !confirm(&mut input, question)? {
            return Ok(());
        }
        if !matches!(state, DisplayState::NotFound) {
            console.session.lock().await.reset();
        }
    }
}

/// Prompt for one field. `None` means the input stream ended.
fn read_field<R: BufRead>(input: &mut R, field: Field, current: &str) -> io::Result<Option<String>> {
    if current.is_empty() {
        print!("root@user:~/{} > ", field.label());
    } else {
        print!("root@user:~/{} [{}] > ", field.label(), current);
    }
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let value = line.trim_end_matches(['\r', '\n']);
    if value.is_empty() {
        Ok(Some(current.to_string()))
    } else {
        Ok(Some(value.to_string()))
    }
}

fn confirm<R: BufRead>(input: &mut R, question: &str) -> io::Result<bool> {
    print!("{question}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

mod check;
mod cli;
mod interactive;
mod notifier;
mod render;

use recruit_status::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

/// Process exit status for a failed run. Fixable input problems exit with 2
/// so scripts can tell them apart from runtime failures.
pub fn exit_code(err: &AppError) -> i32 {
    if err.is_user_error() {
        2
    } else {
        1
    }
}

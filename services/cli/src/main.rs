use recruit_status_cli::{exit_code, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        if err.is_user_error() {
            eprintln!("invalid input: {err}");
        } else {
            eprintln!("application error: {err}");
        }
        std::process::exit(exit_code(&err));
    }
}

use recruit_status::roster::RosterSummary;
use recruit_status::DisplayState;
use std::io::Write;

pub(crate) fn progress(value: u8) {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "\r[ HACKING... {value}% ]");
    let _ = stderr.flush();
}

pub(crate) fn progress_done() {
    eprintln!();
}

pub(crate) fn screen(state: &DisplayState) {
    for line in screen_lines(state) {
        println!("{line}");
    }
}

pub(crate) fn screen_lines(state: &DisplayState) -> Vec<String> {
    match state {
        DisplayState::Idle => vec!["> awaiting input".to_string()],
        DisplayState::Searching { progress, .. } => vec![format!("[ HACKING... {progress}% ]")],
        DisplayState::NotFound => vec![
            "> ERROR: 0x0000404_DATA_NOT_FOUND".to_string(),
            "> IDENTITY_UNKNOWN".to_string(),
            "> IP_ADDRESS_LOGGED...".to_string(),
        ],
        DisplayState::Accepted { record } => vec![
            "ACCEPTED // OFFICIAL RECRUIT".to_string(),
            "SELAMAT! Anda dinyatakan lulus seleksi.".to_string(),
            format!("CODENAME        {}", record.name.to_uppercase()),
            format!("ID ACCESS (NIM) {}", record.student_id),
            "[ TERMINATE SESSION ]".to_string(),
        ],
        DisplayState::Rejected { record } => vec![
            "REJECTED // ACCESS DENIED".to_string(),
            "MOHON MAAF".to_string(),
            "\"Maaf anda tidak lulus, silahkan coba tahun depan ya.\"".to_string(),
            format!("APPLICANT       {}", record.name.to_uppercase()),
            "[ RETRY LATER ]".to_string(),
        ],
    }
}

pub(crate) fn roster_summary(summary: &RosterSummary) {
    println!("Roster summary");
    println!("- total: {}", summary.total);
    println!("- admitted: {}", summary.admitted);
    println!("- not admitted: {}", summary.not_admitted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_status::{CandidateRecord, Outcome};

    #[test]
    fn acceptance_screen_shows_codename_and_student_id() {
        let state = DisplayState::Accepted {
            record: CandidateRecord::new("Budi", "budi@mail.com", "001", Outcome::Admitted),
        };
        let lines = screen_lines(&state);
        assert!(lines[0].starts_with("ACCEPTED"));
        assert!(lines.iter().any(|line| line.ends_with("BUDI")));
        assert!(lines.iter().any(|line| line.ends_with("001")));
    }

    #[test]
    fn rejection_screen_names_applicant_without_student_id() {
        let state = DisplayState::Rejected {
            record: CandidateRecord::new("Sari", "sari@mail.com", "002", Outcome::NotAdmitted),
        };
        let lines = screen_lines(&state);
        assert!(lines[0].starts_with("REJECTED"));
        assert!(lines.iter().any(|line| line.ends_with("SARI")));
        assert!(!lines.iter().any(|line| line.contains("002")));
    }

    #[test]
    fn not_found_screen_reports_unknown_identity() {
        let lines = screen_lines(&DisplayState::NotFound);
        assert!(lines.iter().any(|line| line.contains("DATA_NOT_FOUND")));
    }
}

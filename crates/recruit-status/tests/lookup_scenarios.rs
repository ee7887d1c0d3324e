use recruit_status::roster::RosterFormat;
use recruit_status::{
    lookup, normalize, CandidateRecord, LookupResult, Outcome, RosterStore, Submission, Verdict,
};

fn budi_roster(outcome: Outcome) -> Vec<CandidateRecord> {
    vec![CandidateRecord::new(
        "Budi",
        "budi@mail.com",
        "001",
        outcome,
    )]
}

#[test]
fn differently_cased_submission_matches_admitted_record() {
    let roster = budi_roster(Outcome::Admitted);
    let submission = Submission::new("BUDI", "Budi@Mail.com", "001");

    let result = lookup(&submission, &roster);

    assert_eq!(result.verdict(), Verdict::Admitted);
    assert_eq!(result.record().map(|r| r.name.as_str()), Some("Budi"));
}

#[test]
fn wrong_student_id_is_not_found() {
    let roster = budi_roster(Outcome::Admitted);
    let submission = Submission::new("Budi", "budi@mail.com", "002");

    assert_eq!(lookup(&submission, &roster), LookupResult::NotFound);
}

#[test]
fn not_admitted_record_is_matched_as_not_admitted() {
    let roster = budi_roster(Outcome::NotAdmitted);
    let submission = Submission::new("Budi", "budi@mail.com", "001");

    let result = lookup(&submission, &roster);

    assert_eq!(result.verdict(), Verdict::NotAdmitted);
    assert_eq!(result.outcome(), Some(Outcome::NotAdmitted));
}

#[test]
fn store_and_slice_lookups_agree() {
    let records = vec![
        CandidateRecord::new("Ana", "a@x.com", "123", Outcome::Admitted),
        CandidateRecord::new("Ana", "a@x.com", "124", Outcome::NotAdmitted),
    ];
    let store = RosterStore::new(records.clone());

    let submissions = [
        Submission::new("ana", "A@X.COM", "123"),
        Submission::new("Ana.", "a@x.com", "124,"),
        Submission::new("Ana", "a@x.com", "125"),
        Submission::new("Ana", "a@x.com", ""),
    ];
    for submission in &submissions {
        assert_eq!(store.lookup(submission), lookup(submission, &records));
    }
}

#[test]
fn csv_roster_keeps_first_duplicate_and_strips_commas() {
    let data = include_bytes!("../data/roster.csv");
    let store =
        RosterStore::from_reader(&data[..], RosterFormat::Csv, "lulus").expect("csv roster loads");

    assert_eq!(store.len(), 4);

    let budi = store.lookup(&Submission::new("budi", "budi@mail.com", "001"));
    assert_eq!(budi.verdict(), Verdict::Admitted);

    let hakim = store.lookup(&Submission::new("Hakim Jr", "hakim@mail.com", "003"));
    assert_eq!(hakim.verdict(), Verdict::Admitted);
    assert_eq!(hakim.record().map(|r| r.name.as_str()), Some("Hakim, Jr."));

    let sari = store.lookup(&Submission::new("Sari Dewi", "sari@mail.com", "002"));
    assert_eq!(sari.verdict(), Verdict::NotAdmitted);
}

#[test]
fn passing_marker_is_configurable_and_exact() {
    let data = br#"[{"name": "Ana", "email": "a@x.com", "student_id": "1", "outcome": "admitted"}]"#;

    let english = RosterStore::from_reader(&data[..], RosterFormat::Json, "admitted")
        .expect("json roster loads");
    let default = RosterStore::from_reader(&data[..], RosterFormat::Json, "lulus")
        .expect("json roster loads");
    let submission = Submission::new("Ana", "a@x.com", "1");

    assert_eq!(english.lookup(&submission).verdict(), Verdict::Admitted);
    assert_eq!(default.lookup(&submission).verdict(), Verdict::NotAdmitted);
}

#[test]
fn embedded_roster_matches_a_bundled_candidate() {
    let store = RosterStore::embedded("lulus").expect("embedded roster loads");
    let submission = Submission::new(
        "m fikri hidayat",
        "FIKRI.HIDAYAT@students.uin-suska.ac.id",
        "12250110045",
    );

    // Periods vanish from the email on both sides, so this still matches.
    assert_eq!(store.lookup(&submission).verdict(), Verdict::NotAdmitted);
}

#[test]
fn normalization_strips_only_periods_and_commas() {
    assert_eq!(normalize("John.Doe, Jr."), normalize("johndoe jr"));
    assert_ne!(normalize("Jean-Luc"), normalize("jeanluc"));
    assert_ne!(normalize("D'Arcy"), normalize("darcy"));
}

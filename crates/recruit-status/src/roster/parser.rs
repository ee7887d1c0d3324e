use super::record::{CandidateRecord, Outcome};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Raw roster entry as exported by the registration sheet. Field names follow
/// the export (`nama`, `nim`, `status`) with English aliases accepted.
#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(alias = "nama", default, deserialize_with = "nullable_text")]
    name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    email: String,
    #[serde(
        alias = "nim",
        alias = "studentId",
        default,
        deserialize_with = "nullable_text"
    )]
    student_id: String,
    #[serde(alias = "outcome", default, deserialize_with = "nullable_text")]
    status: String,
}

impl RosterRow {
    fn into_record(self, passing_marker: &str) -> CandidateRecord {
        let outcome = Outcome::from_status(&self.status, passing_marker);
        CandidateRecord {
            name: self.name,
            email: self.email,
            student_id: self.student_id,
            outcome,
        }
    }
}

pub(crate) fn parse_json<R: Read>(
    reader: R,
    passing_marker: &str,
) -> Result<Vec<CandidateRecord>, serde_json::Error> {
    let rows: Vec<RosterRow> = serde_json::from_reader(reader)?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_record(passing_marker))
        .collect())
}

pub(crate) fn parse_csv<R: Read>(
    reader: R,
    passing_marker: &str,
) -> Result<Vec<CandidateRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<RosterRow>() {
        records.push(row?.into_record(passing_marker));
    }

    Ok(records)
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

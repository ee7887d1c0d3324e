//! The immutable candidate roster and the loaders that build it.

mod parser;
mod record;

pub use record::{CandidateRecord, Outcome};

use crate::config::RosterConfig;
use crate::lookup::{first_match, IdentityKey, LookupResult, Submission};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EMBEDDED_ROSTER: &str = include_str!("../../data/roster.json");

/// On-disk encodings a roster may be supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Csv,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid roster CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported roster format for {} (expected .json or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone)]
struct RosterEntry {
    key: IdentityKey,
    record: CandidateRecord,
}

/// Read-only roster, fixed at construction. Identity keys are normalized once
/// up front with the same rules applied to submissions.
#[derive(Debug, Clone)]
pub struct RosterStore {
    entries: Vec<RosterEntry>,
}

impl RosterStore {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| RosterEntry {
                key: IdentityKey::from_record(&record),
                record,
            })
            .collect();
        Self { entries }
    }

    /// Load from the configured path, or the embedded roster when none is set.
    pub fn load(config: &RosterConfig) -> Result<Self, RosterError> {
        match &config.path {
            Some(path) => Self::from_path(path, &config.passing_marker),
            None => Self::embedded(&config.passing_marker),
        }
    }

    pub fn embedded(passing_marker: &str) -> Result<Self, RosterError> {
        let store = Self::from_reader(
            EMBEDDED_ROSTER.as_bytes(),
            RosterFormat::Json,
            passing_marker,
        )?;
        info!(records = store.len(), "loaded embedded roster");
        Ok(store)
    }

    pub fn from_path<P: AsRef<Path>>(path: P, passing_marker: &str) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let format = RosterFormat::from_path(path)
            .ok_or_else(|| RosterError::UnsupportedFormat(path.to_path_buf()))?;
        let file = File::open(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(file, format, passing_marker)?;
        info!(records = store.len(), path = %path.display(), "loaded roster");
        Ok(store)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: RosterFormat,
        passing_marker: &str,
    ) -> Result<Self, RosterError> {
        let records = match format {
            RosterFormat::Json => parser::parse_json(reader, passing_marker)?,
            RosterFormat::Csv => parser::parse_csv(reader, passing_marker)?,
        };
        Ok(Self::new(records))
    }

    /// First record, in roster order, whose normalized triple equals the
    /// submission's.
    pub fn lookup(&self, submission: &Submission) -> LookupResult {
        let result = first_match(
            submission,
            self.entries.iter().map(|entry| (&entry.key, &entry.record)),
        );
        debug!(verdict = result.verdict().label(), "roster lookup resolved");
        result
    }

    pub fn records(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Totals per outcome, for roster summaries.
    pub fn summary(&self) -> RosterSummary {
        let admitted = self.records().filter(|record| record.is_admitted()).count();
        RosterSummary {
            total: self.len(),
            admitted,
            not_admitted: self.len() - admitted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub admitted: usize,
    pub not_admitted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Verdict;

    #[test]
    fn embedded_roster_loads_with_default_marker() {
        let store = RosterStore::embedded("lulus").expect("embedded roster parses");
        let summary = store.summary();
        assert!(summary.total > 0);
        assert!(summary.admitted > 0);
        assert!(summary.not_admitted > 0);
        assert_eq!(summary.total, summary.admitted + summary.not_admitted);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            RosterFormat::from_path(Path::new("roster.JSON")),
            Some(RosterFormat::Json)
        );
        assert_eq!(
            RosterFormat::from_path(Path::new("data/roster.csv")),
            Some(RosterFormat::Csv)
        );
        assert_eq!(RosterFormat::from_path(Path::new("roster.xlsx")), None);
        assert_eq!(RosterFormat::from_path(Path::new("roster")), None);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_opening() {
        let err = RosterStore::from_path("missing/roster.txt", "lulus").expect_err("rejected");
        assert!(matches!(err, RosterError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RosterStore::from_path("missing/roster.json", "lulus").expect_err("missing");
        assert!(matches!(err, RosterError::Io { .. }));
        assert!(err.to_string().contains("missing/roster.json"));
    }

    #[test]
    fn stored_fields_are_normalized_like_submissions() {
        let store = RosterStore::new(vec![CandidateRecord::new(
            " Dewi. Lestari ",
            "DEWI@Mail.com",
            "2024,01",
            Outcome::Admitted,
        )]);
        let submission = Submission::new("dewi lestari", "dewi@mail.com", "202401");

        let result = store.lookup(&submission);
        assert_eq!(result.verdict(), Verdict::Admitted);
        assert_eq!(
            result.record().map(|record| record.name.as_str()),
            Some(" Dewi. Lestari ")
        );
    }
}

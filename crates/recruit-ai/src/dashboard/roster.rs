use std::io::Read;
use std::path::Path;

use super::domain::Candidate;

#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
    Empty,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Io(err) => write!(f, "failed to read candidate roster: {}", err),
            RosterError::Csv(err) => write!(f, "invalid candidate roster data: {}", err),
            RosterError::MissingColumn(column) => {
                write!(f, "candidate roster is missing the {:?} column", column)
            }
            RosterError::Empty => write!(f, "candidate roster contains no usable rows"),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(err) => Some(err),
            RosterError::Csv(err) => Some(err),
            RosterError::MissingColumn(_) | RosterError::Empty => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads candidate (name, email) rows from a CSV export for bulk invites.
/// Header lookup ignores case and a leading BOM; rows with a blank name or
/// email are skipped rather than rejected.
pub struct CandidateRoster;

impl CandidateRoster {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, RosterError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, RosterError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let name_column = locate(&headers, "name").ok_or(RosterError::MissingColumn("name"))?;
        let email_column = locate(&headers, "email").ok_or(RosterError::MissingColumn("email"))?;

        let mut candidates = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let name = record.get(name_column).unwrap_or("").trim();
            let email = record.get(email_column).unwrap_or("").trim();
            if name.is_empty() || email.is_empty() {
                continue;
            }

            candidates.push(Candidate {
                name: name.to_string(),
                email: email.to_string(),
            });
        }

        if candidates.is_empty() {
            return Err(RosterError::Empty);
        }

        Ok(candidates)
    }
}

fn locate(headers: &csv::StringRecord, wanted: &str) -> Option<usize> {
    headers.iter().position(|header| {
        header
            .trim_start_matches('\u{feff}')
            .trim()
            .eq_ignore_ascii_case(wanted)
    })
}

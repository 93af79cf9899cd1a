//! CSV roster loading.
//!
//! A roster is a CSV file with a header row. Columns are matched by name,
//! ignoring case and treating `_`/`-` as spaces; a first name column is
//! required, last name and id columns are optional. Rows are
//! returned in file order, which fixes the order students are assigned to
//! groups.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Student;

/// Errors while reading a roster.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("no first name column in header (expected one of: {expected})")]
    MissingColumn { expected: String },

    #[error("missing first name on line {line}")]
    MissingFirstName { line: u64 },

    #[error("duplicate student id '{id}' on line {line}")]
    DuplicateId { id: String, line: u64 },
}

impl RosterError {
    /// The failure without the file path, for messages that already name
    /// the file.
    pub fn reason(&self) -> String {
        match self {
            Self::Open { source, .. } => source.to_string(),
            Self::Csv { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

/// Accepted header names per column, in normalized form.
const FIRST_NAME_HEADERS: &[&str] = &["first name", "firstname", "given name"];
const LAST_NAME_HEADERS: &[&str] = &["last name", "lastname", "surname", "sort name", "sortname"];
const ID_HEADERS: &[&str] = &["id", "student id", "studentid", "number"];

/// Lowercase a header and treat `_` and `-` as spaces, so `First_Name`,
/// `first-name` and `First Name` all match `first name`.
fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    first_name: usize,
    last_name: Option<usize>,
    id: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, RosterError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |names: &[&str]| normalized.iter().position(|h| names.contains(&h.as_str()));

        let first_name = find(FIRST_NAME_HEADERS).ok_or_else(|| RosterError::MissingColumn {
            expected: FIRST_NAME_HEADERS.join(", "),
        })?;

        Ok(Self {
            first_name,
            last_name: find(LAST_NAME_HEADERS),
            id: find(ID_HEADERS),
        })
    }

    fn field(row: &csv::StringRecord, index: Option<usize>) -> String {
        index
            .and_then(|i| row.get(i))
            .unwrap_or_default()
            .to_string()
    }
}

/// Read students from a CSV file on disk.
pub fn read_students(path: &Path) -> Result<Vec<Student>, RosterError> {
    let file = std::fs::File::open(path).map_err(|e| RosterError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let students = parse_students(file).map_err(|e| match e {
        RosterError::Csv { source, .. } => RosterError::Csv {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    tracing::debug!(path = %path.display(), students = students.len(), "read roster");
    Ok(students)
}

/// Parse students from any CSV source.
///
/// Parse failures are reported against the placeholder path `<input>`;
/// [`read_students`] substitutes the real file path.
pub fn parse_students(reader: impl Read) -> Result<Vec<Student>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let csv_err = |e| RosterError::Csv {
        path: PathBuf::from("<input>"),
        source: e,
    };

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let columns = Columns::resolve(&headers)?;
    tracing::debug!(?columns, "resolved roster columns");

    let mut students = Vec::new();
    let mut seen_ids = HashSet::new();

    for result in rdr.records() {
        let row = result.map_err(csv_err)?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let first_name = Columns::field(&row, Some(columns.first_name));
        let last_name = Columns::field(&row, columns.last_name);
        let id = Some(Columns::field(&row, columns.id)).filter(|id| !id.is_empty());

        if first_name.is_empty() {
            if last_name.is_empty() && id.is_none() {
                // Row of empty fields, e.g. a trailing ",,".
                continue;
            }
            return Err(RosterError::MissingFirstName { line });
        }

        if let Some(ref id) = id {
            if !seen_ids.insert(id.clone()) {
                return Err(RosterError::DuplicateId {
                    id: id.clone(),
                    line,
                });
            }
        }

        students.push(Student {
            first_name,
            last_name,
            id,
        });
    }

    Ok(students)
}

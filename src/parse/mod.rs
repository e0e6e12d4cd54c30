//! Record parser: Jira CSV export -> [`SourceRecord`]s.
//!
//! The export has a header row. Required columns are matched by exact
//! name; the `Comment` column may appear any number of times in the header
//! (Jira writes one column per comment), and every `Comment` cell of a row
//! is collected in header order into that record's comment list.
//!
//! The parser is deliberately dumb about values: it does not validate
//! issue types, statuses, or comment shapes. Mapping owns those rules.

use crate::error::{MigrateError, Result};
use crate::model::SourceRecord;
use csv::{Reader, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every export row must supply, by header name.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Summary",
    "Issue key",
    "Issue Type",
    "Status",
    "Priority",
    "Resolution",
    "Created",
    "Description",
    "Environment",
];

/// Header name of the repeatable comment column.
pub const COMMENT_COLUMN: &str = "Comment";

/// Resolved positions of the required columns within the header row.
#[derive(Debug)]
struct ColumnIndex {
    summary: usize,
    issue_key: usize,
    issue_type: usize,
    status: usize,
    priority: usize,
    resolution: usize,
    created: usize,
    description: usize,
    environment: usize,
    /// Positions of every `Comment` column, in header order.
    comments: Vec<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| MigrateError::MissingColumn {
                    column: name.to_string(),
                })
        };

        let comments = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == COMMENT_COLUMN)
            .map(|(i, _)| i)
            .collect();

        Ok(Self {
            summary: find("Summary")?,
            issue_key: find("Issue key")?,
            issue_type: find("Issue Type")?,
            status: find("Status")?,
            priority: find("Priority")?,
            resolution: find("Resolution")?,
            created: find("Created")?,
            description: find("Description")?,
            environment: find("Environment")?,
            comments,
        })
    }

    fn record(&self, row: &StringRecord) -> SourceRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or_default().to_string();

        SourceRecord {
            key: cell(self.issue_key),
            summary: cell(self.summary),
            issue_type: cell(self.issue_type),
            status: cell(self.status),
            priority: cell(self.priority),
            resolution: cell(self.resolution),
            created: cell(self.created),
            description: cell(self.description),
            environment: cell(self.environment),
            comments: self.comments.iter().map(|&idx| cell(idx)).collect(),
        }
    }
}

/// Parse an export from any reader, in file order.
///
/// # Errors
///
/// Returns [`MigrateError::MissingColumn`] if a required column is absent
/// from the header, or [`MigrateError::Csv`] for malformed CSV (ragged
/// rows, bad quoting, unreadable input).
pub fn read_records<R: Read>(reader: R) -> Result<Vec<SourceRecord>> {
    let mut csv_reader = Reader::from_reader(reader);
    let index = ColumnIndex::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        records.push(index.record(&row?));
    }
    Ok(records)
}

/// Parse an export file from disk.
///
/// # Errors
///
/// As [`read_records`], plus [`MigrateError::Io`] if the file cannot be
/// opened.
pub fn read_records_from_path(path: &Path) -> Result<Vec<SourceRecord>> {
    let file = File::open(path)?;
    read_records(file)
}

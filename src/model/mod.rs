//! Core data types for jira2gh.
//!
//! This module defines the types flowing through the migration pipeline:
//! - `SourceRecord` - one row of the Jira export, as parsed
//! - `Label` - the GitHub label a record maps to
//! - `MappedIssue` / `MappedComment` - the GitHub-side shape, ready to push
//! - `PushSummary` - counts reported after a push
//!
//! A `SourceRecord` is created by parsing, consumed exactly once by the
//! mapper, and dropped. A `MappedIssue` is consumed exactly once by the
//! push step. Scratch files named by `body_path` outlive the process as a
//! side effect only; nothing here re-reads them.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One row of the Jira export. Field values are carried verbatim; the
/// parser does not validate them (that is the mapper's job).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRecord {
    /// Unique issue key, e.g. "PROJ-42".
    pub key: String,
    pub summary: String,
    pub issue_type: String,
    pub status: String,
    pub priority: String,
    /// Empty string when the export has no resolution for the row.
    pub resolution: String,
    pub created: String,
    pub description: String,
    /// Overflow field; some rows carry description text here by mistake.
    pub environment: String,
    /// Raw comment cells in header order, each "date; author; text".
    pub comments: Vec<String>,
}

/// GitHub label assigned to a migrated issue.
///
/// Only these two labels exist on the target repository; the mapping from
/// Jira issue types is a fixed fail-closed table in the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Bug,
    Enhancement,
}

impl Label {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Enhancement => "enhancement",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A GitHub issue ready to be pushed, derived from exactly one
/// [`SourceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedIssue {
    pub title: String,
    pub body: String,
    pub label: Label,
    /// Close the issue after creation.
    pub closed: bool,
    pub comments: Vec<MappedComment>,
    /// Scratch file the body is written to before invoking gh.
    /// Unique per issue (derived from the record key).
    pub body_path: PathBuf,
}

/// A comment on a [`MappedIssue`], in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedComment {
    pub body: String,
    /// Scratch file path, unique per comment within its issue.
    pub body_path: PathBuf,
}

/// Counts reported after a push (or dry-run) completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PushSummary {
    pub issues_created: usize,
    pub comments_added: usize,
    pub issues_closed: usize,
}

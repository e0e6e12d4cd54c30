//! Error types for jira2gh.
//!
//! Every error here is fatal: this is a human-supervised one-shot
//! migration, and a partial, silently-degraded run is worse than a loud
//! full stop. Nothing is retried or recovered locally, and issues already
//! created on the target repository are not rolled back.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for jira2gh operations.
#[derive(Error, Debug)]
pub enum MigrateError {
    // === Parse Errors ===
    /// A required column is missing from the export's header row.
    #[error("Required column missing from export: '{column}'")]
    MissingColumn { column: String },

    /// Underlying CSV error (ragged row, bad quoting, unreadable file).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // === Mapping Errors ===
    /// Issue type with no entry in the label table.
    #[error("Unsupported issue type: {issue_type}")]
    UnsupportedIssueType { issue_type: String },

    /// Status with no entry in the open/closed table.
    #[error("Unsupported status: {status}")]
    UnsupportedStatus { status: String },

    /// Raw comment did not split into date; author; text.
    #[error("Malformed comment: {raw}")]
    MalformedComment { raw: String },

    // === External Client Errors ===
    /// The gh process exited non-zero.
    #[error("gh command failed with exit code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    /// gh issue create exited zero but printed no issue URL.
    /// Observed failure mode of the real tool.
    #[error("gh issue create returned no issue URL for '{title}'")]
    EmptyHandle { title: String },

    // === Environment Errors ===
    /// Scratch directory could not be created.
    #[error("Scratch directory unavailable: '{path}'")]
    DirectoryUnavailable { path: PathBuf },

    // === I/O and serialization ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (summary output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MigrateError {
    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingColumn { .. } => {
                Some("Re-export from Jira with all fields, or check the header row")
            }
            Self::UnsupportedIssueType { .. } => {
                Some("Supported types: Bug, Task, Improvement, New Feature, Epic")
            }
            Self::UnsupportedStatus { .. } => Some("Supported statuses: To Do, Done"),
            Self::MalformedComment { .. } => {
                Some("Comments must be 'date; author; text' (semicolon-delimited)")
            }
            Self::EmptyHandle { .. } => {
                Some("Check 'gh auth status' and re-run; the failed issue was not created")
            }
            _ => None,
        }
    }

    /// Exit code for this error. Every failure is fatal and exits 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type using [`MigrateError`].
pub type Result<T> = std::result::Result<T, MigrateError>;

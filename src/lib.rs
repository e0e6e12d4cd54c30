//! jira2gh - one-shot migrator from a Jira CSV export to GitHub issues.
//!
//! The pipeline is deliberately simple and sequential:
//! parse the export ([`parse`]) into source records, map each record to a
//! GitHub issue ([`map`]), write a human-readable dump for operator review,
//! then push every issue through the `gh` CLI ([`gh`]) in source order
//! ([`driver`]). Any failure aborts the run; already-created issues are not
//! rolled back. Re-running the same input creates duplicates.

pub mod cli;
pub mod driver;
pub mod error;
pub mod format;
pub mod gh;
pub mod logging;
pub mod map;
pub mod model;
pub mod parse;

pub use error::{MigrateError, Result};

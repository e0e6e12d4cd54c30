//! Batch driver: parse -> map -> dump -> push, strictly in source order.
//!
//! Single-threaded and blocking throughout. The only point this program
//! waits on anything is the spawned gh process. A failure on any issue
//! aborts the remaining batch; issues already created are not rolled
//! back, and re-running the same export creates duplicates.

use crate::error::{MigrateError, Result};
use crate::format::{DUMP_FILE_NAME, render_dump};
use crate::gh::IssueClient;
use crate::map::map_records;
use crate::model::{MappedIssue, PushSummary};
use crate::parse::read_records_from_path;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Injected file-writing capability for scratch files.
///
/// Production writes to disk; tests substitute an in-memory store so the
/// push sequence can be exercised without touching the filesystem.
pub trait ScratchStore {
    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// Filesystem-backed [`ScratchStore`].
#[derive(Debug, Default)]
pub struct FsStore;

impl ScratchStore for FsStore {
    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Resolve and create the scratch directory.
///
/// Defaults to `<platform temp>/j2gh` when the caller gave no directory.
///
/// # Errors
///
/// Returns [`MigrateError::DirectoryUnavailable`] if the directory cannot
/// be created.
pub fn ensure_scratch_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = dir.unwrap_or_else(|| env::temp_dir().join("j2gh"));
    fs::create_dir_all(&dir)
        .map_err(|_| MigrateError::DirectoryUnavailable { path: dir.clone() })?;
    Ok(dir)
}

/// Parse the export and map every record, with scratch paths under
/// `scratch_dir`.
///
/// # Errors
///
/// Propagates parser and mapper errors; the first bad row aborts.
pub fn load_plan(input: &Path, scratch_dir: &Path) -> Result<Vec<MappedIssue>> {
    let records = read_records_from_path(input)?;
    info!(count = records.len(), "parsed export");
    map_records(&records, scratch_dir)
}

/// Write the operator-review dump to the scratch directory.
///
/// # Errors
///
/// Returns an error if the dump file cannot be written.
pub fn write_dump(
    issues: &[MappedIssue],
    scratch_dir: &Path,
    store: &mut dyn ScratchStore,
) -> Result<PathBuf> {
    let path = scratch_dir.join(DUMP_FILE_NAME);
    store.write(&path, &render_dump(issues))?;
    Ok(path)
}

/// Push every mapped issue through the client, in order.
///
/// Per issue: write the body scratch file, create, then each comment
/// (write file, add), then close when flagged.
///
/// # Errors
///
/// The first scratch-file or client failure aborts the batch.
pub fn push(
    issues: &[MappedIssue],
    repo: &str,
    client: &mut dyn IssueClient,
    store: &mut dyn ScratchStore,
) -> Result<PushSummary> {
    let mut summary = PushSummary::default();

    for issue in issues {
        println!("Pushing \"{}\"...", issue.title);

        store.write(&issue.body_path, &issue.body)?;
        let handle = client.create(&issue.title, issue.label, &issue.body_path, repo)?;
        debug!(%handle, "issue created");
        summary.issues_created += 1;

        if !issue.comments.is_empty() {
            println!("Adding {} comments...", issue.comments.len());
        }
        for comment in &issue.comments {
            store.write(&comment.body_path, &comment.body)?;
            client.add_comment(&handle, &comment.body_path)?;
            summary.comments_added += 1;
        }

        if issue.closed {
            println!("Closing issue...");
            client.close(&handle)?;
            summary.issues_closed += 1;
        }
    }

    Ok(summary)
}

/// Full pipeline: scratch dir, parse, map, dump, push.
///
/// # Errors
///
/// Propagates the first error from any stage.
pub fn run(
    input: &Path,
    scratch_dir: Option<PathBuf>,
    repo: &str,
    client: &mut dyn IssueClient,
) -> Result<PushSummary> {
    let scratch_dir = ensure_scratch_dir(scratch_dir)?;
    let issues = load_plan(input, &scratch_dir)?;

    let mut store = FsStore;
    let dump_path = write_dump(&issues, &scratch_dir, &mut store)?;
    info!(path = %dump_path.display(), "wrote review dump");

    push(&issues, repo, client, &mut store)
}

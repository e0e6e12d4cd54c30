//! External client adapter for the GitHub CLI.
//!
//! [`IssueClient`] is the seam between the batch driver and the outside
//! world: the production implementation spawns `gh` and waits for it,
//! [`DryRunClient`] prints the would-be invocations, and tests substitute
//! a recording double. Body text always travels via a scratch file
//! (`--body-file`) because gh reads bodies from disk, not inline args.
//!
//! There are no retries. One failed invocation aborts the whole batch.

use crate::error::{MigrateError, Result};
use crate::model::Label;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Operations the migration needs from the target issue tracker.
///
/// `create` returns an opaque handle (for gh, the issue URL printed on
/// stdout) that the other operations address the issue by.
pub trait IssueClient {
    /// Create an issue and return its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying command fails or yields no
    /// usable handle.
    fn create(
        &mut self,
        title: &str,
        label: Label,
        body_path: &Path,
        repo: &str,
    ) -> Result<String>;

    /// Add a comment to an existing issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying command fails.
    fn add_comment(&mut self, handle: &str, body_path: &Path) -> Result<()>;

    /// Close an existing issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying command fails.
    fn close(&mut self, handle: &str) -> Result<()>;
}

/// Real client: spawns the `gh` binary and blocks until it exits.
pub struct GhClient {
    program: String,
}

impl GhClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "gh".to_string(),
        }
    }

    /// Use a different binary in place of `gh`. Test hook.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        debug!(program = %self.program, ?args, "spawning");
        let output = Command::new(&self.program).args(args).output()?;

        if !output.status.success() {
            return Err(MigrateError::CommandFailed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for GhClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueClient for GhClient {
    fn create(
        &mut self,
        title: &str,
        label: Label,
        body_path: &Path,
        repo: &str,
    ) -> Result<String> {
        let body_file = body_path.display().to_string();
        let handle = self.run(&[
            "issue",
            "create",
            "--title",
            title,
            "--label",
            label.as_str(),
            "--body-file",
            &body_file,
            "-R",
            repo,
        ])?;

        // gh has been seen to exit 0 without printing a URL. Treat that
        // as a failure; the issue cannot be commented on or closed.
        if handle.is_empty() {
            return Err(MigrateError::EmptyHandle {
                title: title.to_string(),
            });
        }

        Ok(handle)
    }

    fn add_comment(&mut self, handle: &str, body_path: &Path) -> Result<()> {
        let body_file = body_path.display().to_string();
        self.run(&["issue", "comment", handle, "--body-file", &body_file])?;
        Ok(())
    }

    fn close(&mut self, handle: &str) -> Result<()> {
        self.run(&["issue", "close", handle])?;
        Ok(())
    }
}

/// Prints each invocation instead of spawning gh, so an operator can
/// audit the full command stream before a live run.
#[derive(Debug, Default)]
pub struct DryRunClient {
    created: usize,
}

impl DryRunClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IssueClient for DryRunClient {
    fn create(
        &mut self,
        title: &str,
        label: Label,
        body_path: &Path,
        repo: &str,
    ) -> Result<String> {
        println!(
            "gh issue create --title \"{title}\" --label \"{label}\" --body-file \"{}\" -R \"{repo}\"",
            body_path.display()
        );
        self.created += 1;
        Ok(format!("dry-run-{}", self.created))
    }

    fn add_comment(&mut self, handle: &str, body_path: &Path) -> Result<()> {
        println!(
            "gh issue comment \"{handle}\" --body-file \"{}\"",
            body_path.display()
        );
        Ok(())
    }

    fn close(&mut self, handle: &str) -> Result<()> {
        println!("gh issue close \"{handle}\"");
        Ok(())
    }
}

//! Debug-dump rendering.
//!
//! Before pushing anything, the driver writes a plain-text dump of every
//! mapped issue and comment to the scratch directory so the operator can
//! eyeball the migration. The dump is for humans only; nothing reads it
//! back.

use crate::model::MappedIssue;
use std::fmt::Write as _;

/// File name of the dump inside the scratch directory.
pub const DUMP_FILE_NAME: &str = "_issues.txt";

const ISSUE_RULE: &str = "----------------------------------------";
const COMMENT_RULE: &str = "---";

/// Render all mapped issues as one reviewable text blob.
#[must_use]
pub fn render_dump(issues: &[MappedIssue]) -> String {
    let mut out = String::new();

    for issue in issues {
        let _ = writeln!(out, "{ISSUE_RULE}");
        let _ = writeln!(out, "Title: {}", issue.title);
        let _ = writeln!(out, "Open: {}", if issue.closed { "No" } else { "Yes" });
        let _ = writeln!(out, "Label: {}", issue.label);
        let _ = writeln!(out, "Body: {}", issue.body_path.display());
        let _ = writeln!(out, "{}", issue.body);
        let _ = writeln!(out, "Comments:");
        for comment in &issue.comments {
            let _ = writeln!(out, "{COMMENT_RULE}");
            let _ = writeln!(out, "File: {}", comment.body_path.display());
            let _ = writeln!(out, "{}", comment.body);
            let _ = writeln!(out, "{COMMENT_RULE}");
        }
        let _ = writeln!(out, "{ISSUE_RULE}");
    }

    out
}

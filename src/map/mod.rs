//! Field mapper: [`SourceRecord`] -> [`MappedIssue`].
//!
//! Pure and stateless. The mapping tables are fixed const slices with a
//! fallback error, so "what fails closed" stays auditable in one place.
//! Unknown values abort the whole run: an unmapped issue type or status
//! means the table is incomplete and the operator must extend it, not
//! that the row should be skipped.

use crate::error::{MigrateError, Result};
use crate::model::{Label, MappedComment, MappedIssue, SourceRecord};
use std::path::Path;

/// Issue-type -> label table. Anything not listed is unsupported.
const LABEL_TABLE: &[(&str, Label)] = &[
    ("Bug", Label::Bug),
    ("Task", Label::Enhancement),
    ("Improvement", Label::Enhancement),
    ("New Feature", Label::Enhancement),
    ("Epic", Label::Enhancement),
];

/// Status -> closed-flag table. Anything not listed is unsupported.
const CLOSED_TABLE: &[(&str, bool)] = &[("To Do", false), ("Done", true)];

/// Map one source record to a GitHub issue, with scratch paths under
/// `scratch_dir`.
///
/// # Errors
///
/// Returns [`MigrateError::UnsupportedIssueType`],
/// [`MigrateError::UnsupportedStatus`], or
/// [`MigrateError::MalformedComment`] when a value has no table entry or
/// a comment does not split into three parts.
pub fn map_record(record: &SourceRecord, scratch_dir: &Path) -> Result<MappedIssue> {
    let comments = record
        .comments
        .iter()
        .filter(|raw| !raw.is_empty())
        .enumerate()
        .map(|(idx, raw)| {
            Ok(MappedComment {
                body: render_comment(raw)?,
                body_path: scratch_dir.join(format!("{}-comment-{idx}.txt", record.key)),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MappedIssue {
        title: render_title(&record.key, &record.summary),
        body: render_body(record),
        label: map_label(&record.issue_type)?,
        closed: map_closed(&record.status)?,
        comments,
        body_path: scratch_dir.join(format!("{}.txt", record.key)),
    })
}

/// Map every record, in order. First failure aborts.
///
/// # Errors
///
/// As [`map_record`].
pub fn map_records(records: &[SourceRecord], scratch_dir: &Path) -> Result<Vec<MappedIssue>> {
    records
        .iter()
        .map(|record| map_record(record, scratch_dir))
        .collect()
}

/// `"{key} - {summary}"` with every double quote replaced by `_`.
/// gh receives the title as a shell-ish argument; embedded quotes broke it.
#[must_use]
pub fn render_title(key: &str, summary: &str) -> String {
    format!("{key} - {summary}").replace('"', "_")
}

/// Issue body: a "Date Filed" line, a "Resolution" line when non-empty, a
/// blank separator line, then description with environment appended
/// directly after. Some rows had their description entered in the
/// Environment column by mistake, so both fields are concatenated rather
/// than one replacing the other.
#[must_use]
pub fn render_body(record: &SourceRecord) -> String {
    let mut body = String::new();

    body.push_str("Date Filed: ");
    body.push_str(&record.created);
    body.push('\n');
    if !record.resolution.is_empty() {
        body.push_str("Resolution: ");
        body.push_str(&record.resolution);
        body.push('\n');
    }
    body.push('\n');

    body.push_str(&record.description);
    body.push_str(&record.environment);

    body
}

/// Look up the label for a Jira issue type.
///
/// # Errors
///
/// Returns [`MigrateError::UnsupportedIssueType`] for any type not in the
/// table.
pub fn map_label(issue_type: &str) -> Result<Label> {
    LABEL_TABLE
        .iter()
        .find(|(name, _)| *name == issue_type)
        .map(|&(_, label)| label)
        .ok_or_else(|| MigrateError::UnsupportedIssueType {
            issue_type: issue_type.to_string(),
        })
}

/// Look up whether a Jira status means the GitHub issue should be closed.
///
/// # Errors
///
/// Returns [`MigrateError::UnsupportedStatus`] for any status not in the
/// table.
pub fn map_closed(status: &str) -> Result<bool> {
    CLOSED_TABLE
        .iter()
        .find(|(name, _)| *name == status)
        .map(|&(_, closed)| closed)
        .ok_or_else(|| MigrateError::UnsupportedStatus {
            status: status.to_string(),
        })
}

/// Render one raw `date; author; text` comment cell into a comment body.
/// The author is dropped; text keeps any further semicolons.
///
/// # Errors
///
/// Returns [`MigrateError::MalformedComment`] when the cell has fewer
/// than three parts.
pub fn render_comment(raw: &str) -> Result<String> {
    let parts: Vec<&str> = raw.splitn(3, ';').map(str::trim).collect();
    if parts.len() < 3 {
        return Err(MigrateError::MalformedComment {
            raw: raw.to_string(),
        });
    }

    Ok(format!("Date: {}\n\n{}", parts[0], parts[2]))
}

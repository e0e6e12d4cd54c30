mod common;

use common::ExportFixture;
use jira2gh::driver::{self, FsStore, ScratchStore};
use jira2gh::error::{MigrateError, Result};
use jira2gh::gh::IssueClient;
use jira2gh::model::Label;
use std::fs;
use std::path::Path;

/// Records every client call instead of spawning gh.
#[derive(Default)]
struct RecordingClient {
    calls: Vec<String>,
    fail_after_creates: Option<usize>,
}

impl IssueClient for RecordingClient {
    fn create(
        &mut self,
        title: &str,
        label: Label,
        body_path: &Path,
        repo: &str,
    ) -> Result<String> {
        let creates = self.calls.iter().filter(|c| c.starts_with("create")).count();
        if self.fail_after_creates == Some(creates) {
            return Err(MigrateError::CommandFailed {
                code: 4,
                stderr: "injected".to_string(),
            });
        }
        self.calls.push(format!(
            "create title={title} label={label} body={} repo={repo}",
            body_path.display()
        ));
        Ok(format!("https://github.test/issues/{}", self.calls.len()))
    }

    fn add_comment(&mut self, handle: &str, body_path: &Path) -> Result<()> {
        self.calls
            .push(format!("comment handle={handle} body={}", body_path.display()));
        Ok(())
    }

    fn close(&mut self, handle: &str) -> Result<()> {
        self.calls.push(format!("close handle={handle}"));
        Ok(())
    }
}

#[test]
fn e2e_two_row_export_call_sequence() {
    let fixture = ExportFixture::new(&common::two_row_export());
    let mut client = RecordingClient::default();

    let summary = driver::run(
        &fixture.csv_path,
        Some(fixture.scratch_dir.clone()),
        "org/repo",
        &mut client,
    )
    .expect("migration should succeed");

    let kinds: Vec<&str> = client
        .calls
        .iter()
        .map(|c| c.split(' ').next().unwrap())
        .collect();
    assert_eq!(kinds, vec!["create", "comment", "create", "close"]);

    assert!(client.calls[0].contains("title=PROJ-1 - Fix the crash"));
    assert!(client.calls[0].contains("label=bug"));
    assert!(client.calls[0].contains("repo=org/repo"));
    assert!(client.calls[1].contains("PROJ-1-comment-0.txt"));
    assert!(client.calls[2].contains("title=PROJ-2 - Add dark mode"));
    assert!(client.calls[2].contains("label=enhancement"));
    // Close addresses the handle returned by the second create.
    assert!(client.calls[3].contains("handle=https://github.test/issues/3"));

    assert_eq!(summary.issues_created, 2);
    assert_eq!(summary.comments_added, 1);
    assert_eq!(summary.issues_closed, 1);
}

#[test]
fn e2e_scratch_files_hold_rendered_bodies() {
    let fixture = ExportFixture::new(&common::two_row_export());
    let mut client = RecordingClient::default();

    driver::run(
        &fixture.csv_path,
        Some(fixture.scratch_dir.clone()),
        "org/repo",
        &mut client,
    )
    .expect("migration should succeed");

    let body = fs::read_to_string(fixture.scratch_dir.join("PROJ-1.txt")).unwrap();
    assert_eq!(body, "Date Filed: 2024-01-01\n\nIt crashes on start.");

    let comment = fs::read_to_string(fixture.scratch_dir.join("PROJ-1-comment-0.txt")).unwrap();
    assert_eq!(comment, "Date: 2024-01-02\n\nLooks good");

    let body_two = fs::read_to_string(fixture.scratch_dir.join("PROJ-2.txt")).unwrap();
    assert_eq!(
        body_two,
        "Date Filed: 2024-01-03\nResolution: Fixed\n\nUsers want it."
    );
}

#[test]
fn e2e_review_dump_written_before_push() {
    let fixture = ExportFixture::new(&common::two_row_export());
    // Fail on the very first create: the dump must still be on disk.
    let mut client = RecordingClient {
        fail_after_creates: Some(0),
        ..Default::default()
    };

    let err = driver::run(
        &fixture.csv_path,
        Some(fixture.scratch_dir.clone()),
        "org/repo",
        &mut client,
    )
    .unwrap_err();
    assert!(matches!(err, MigrateError::CommandFailed { code: 4, .. }));

    let dump = fs::read_to_string(fixture.scratch_dir.join("_issues.txt")).unwrap();
    assert!(dump.contains("Title: PROJ-1 - Fix the crash"));
    assert!(dump.contains("Title: PROJ-2 - Add dark mode"));
    assert!(dump.contains("Open: No"));
}

#[test]
fn e2e_mid_batch_failure_keeps_earlier_issues() {
    let fixture = ExportFixture::new(&common::two_row_export());
    // First issue goes through, second create fails. No rollback.
    let mut client = RecordingClient {
        fail_after_creates: Some(1),
        ..Default::default()
    };

    let err = driver::run(
        &fixture.csv_path,
        Some(fixture.scratch_dir.clone()),
        "org/repo",
        &mut client,
    )
    .unwrap_err();
    assert!(matches!(err, MigrateError::CommandFailed { .. }));

    let kinds: Vec<&str> = client
        .calls
        .iter()
        .map(|c| c.split(' ').next().unwrap())
        .collect();
    assert_eq!(kinds, vec!["create", "comment"]);
}

#[test]
fn e2e_unsupported_type_aborts_before_any_push() {
    let csv = format!(
        "{}\nSplit the work,PROJ-9,Sub-task,To Do,Low,,2024-01-01,d,\n",
        common::EXPORT_HEADER
    );
    let fixture = ExportFixture::new(&csv);
    let mut client = RecordingClient::default();

    let err = driver::run(
        &fixture.csv_path,
        Some(fixture.scratch_dir.clone()),
        "org/repo",
        &mut client,
    )
    .unwrap_err();

    match err {
        MigrateError::UnsupportedIssueType { issue_type } => assert_eq!(issue_type, "Sub-task"),
        other => panic!("expected UnsupportedIssueType, got {other}"),
    }
    assert!(client.calls.is_empty());
}

#[test]
fn e2e_rerun_duplicates_issues() {
    // Idempotence is documented as not guaranteed: a second run pushes
    // the same issues again.
    let fixture = ExportFixture::new(&common::two_row_export());
    let mut client = RecordingClient::default();

    for _ in 0..2 {
        driver::run(
            &fixture.csv_path,
            Some(fixture.scratch_dir.clone()),
            "org/repo",
            &mut client,
        )
        .expect("migration should succeed");
    }

    let creates = client
        .calls
        .iter()
        .filter(|c| c.starts_with("create"))
        .count();
    assert_eq!(creates, 4);
}

#[test]
fn e2e_fs_store_round_trip() {
    let fixture = ExportFixture::new(&common::two_row_export());
    let path = fixture.scratch_dir.join("probe.txt");

    let mut store = FsStore;
    store.write(&path, "payload").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "payload");
}

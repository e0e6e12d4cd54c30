#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(jira2gh::logging::init_test_logging);
}

/// Header row matching a real Jira export, without comment columns.
pub const EXPORT_HEADER: &str =
    "Summary,Issue key,Issue Type,Status,Priority,Resolution,Created,Description,Environment";

/// A temp workspace holding an export CSV and a scratch directory.
pub struct ExportFixture {
    pub temp_dir: TempDir,
    pub csv_path: PathBuf,
    pub scratch_dir: PathBuf,
}

impl ExportFixture {
    /// Write `csv` verbatim as the export file. The scratch directory is
    /// created empty next to it.
    pub fn new(csv: &str) -> Self {
        init_test_logging();

        let temp_dir = TempDir::new().expect("temp dir");
        let csv_path = temp_dir.path().join("export.csv");
        fs::write(&csv_path, csv).expect("write export");

        let scratch_dir = temp_dir.path().join("scratch");
        fs::create_dir_all(&scratch_dir).expect("scratch dir");

        Self {
            temp_dir,
            csv_path,
            scratch_dir,
        }
    }
}

/// The two-row export scenario: one open Bug with one comment, one done
/// Task with none.
pub fn two_row_export() -> String {
    format!(
        "{EXPORT_HEADER},Comment\n\
         Fix the crash,PROJ-1,Bug,To Do,High,,2024-01-01,It crashes on start.,,2024-01-02; Alice; Looks good\n\
         Add dark mode,PROJ-2,Task,Done,Low,Fixed,2024-01-03,Users want it.,,\n"
    )
}

//! CLI definitions.

use clap::Parser;
use std::path::PathBuf;

/// Migrate a Jira CSV export to GitHub issues via the gh CLI
#[derive(Parser, Debug)]
#[command(name = "j2gh", author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Jira CSV export file to migrate
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Target GitHub repository (OWNER/REPO)
    #[arg(long, value_name = "REPO")]
    pub repo: String,

    /// Scratch directory for body files (defaults to the platform temp dir)
    #[arg(short = 't', long = "tmp-dir", value_name = "DIR")]
    pub tmp_dir: Option<PathBuf>,

    /// Print gh invocations instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

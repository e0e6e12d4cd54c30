use clap::Parser;
use jira2gh::MigrateError;
use jira2gh::cli::Cli;
use jira2gh::driver;
use jira2gh::gh::{DryRunClient, GhClient, IssueClient};
use jira2gh::logging::init_logging;
use jira2gh::model::PushSummary;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet, None) {
        eprintln!("Failed to initialize logging: {e}");
        // Continue without logging; the migration itself is unaffected.
    }

    match run(&cli) {
        Ok(summary) => report(&summary, cli.json),
        Err(e) => handle_error(&e),
    }
}

fn run(cli: &Cli) -> jira2gh::Result<PushSummary> {
    let mut client: Box<dyn IssueClient> = if cli.dry_run {
        Box::new(DryRunClient::new())
    } else {
        Box::new(GhClient::new())
    };

    driver::run(&cli.input, cli.tmp_dir.clone(), &cli.repo, client.as_mut())
}

fn report(summary: &PushSummary, json: bool) {
    if json {
        match serde_json::to_string_pretty(summary) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("Failed to serialize summary: {e}"),
        }
    } else {
        println!(
            "Done: {} issues created, {} comments added, {} issues closed.",
            summary.issues_created, summary.comments_added, summary.issues_closed
        );
    }
}

/// Print the error (with a hint when one exists) and exit non-zero.
fn handle_error(err: &MigrateError) -> ! {
    eprintln!("Error: {err}");
    if let Some(hint) = err.suggestion() {
        eprintln!("Hint: {hint}");
    }
    std::process::exit(err.exit_code());
}

//! Logging initialization.
//!
//! User-facing progress goes to stdout via `println!`; tracing carries
//! diagnostics to stderr. Verbosity maps `-v`/`-vv` to info/debug and
//! `-q` to errors only, with `RUST_LOG` taking precedence when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `filter_override` wins over everything; otherwise `RUST_LOG` is
/// honored, falling back to a level derived from the flags.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(
    verbose: u8,
    quiet: bool,
    filter_override: Option<&str>,
) -> anyhow::Result<()> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = match filter_override {
        Some(spec) => EnvFilter::try_new(spec)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("jira2gh={default_level}"))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set subscriber: {e}"))?;

    Ok(())
}

/// Test-only initialization: capture output per test, ignore re-init.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jira2gh=debug")),
        )
        .with_test_writer()
        .try_init();
}

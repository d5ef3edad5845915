//! Diagnostics for the `payroll` binary.
//!
//! Events go to stderr so that `list --format json` and friends stay
//! pipeable. The level comes from the global flags:
//!
//! | Flag(s)   | payroll crates |
//! |-----------|----------------|
//! | (none)    | WARN           |
//! | `-v`      | INFO           |
//! | `-vv`     | DEBUG          |
//! | `-vvv`    | TRACE          |
//! | `--quiet` | ERROR          |
//!
//! `PAYROLL_LOG`, then `RUST_LOG`, replace the flag-derived filter entirely
//! when set to a valid directive.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Environment variable checked before `RUST_LOG`.
const LOG_ENV: &str = "PAYROLL_LOG";

/// Crates whose events the default filter lets through.
const TARGETS: [&str; 3] = ["payroll", "payroll_core", "payroll_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(level >= LevelFilter::DEBUG)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `--quiet` wins over any number of `-v`.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Same level for every payroll crate; dependencies stay silent.
fn directive(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

//! Course Scout CLI
//!
//! Lists courses whose enrollment has not opened yet.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{ArgAction, Parser};
use course_scout::{
    error::Result,
    models::{Config, SearchOptions, SearchParams, StudentCategory},
    output::OutputFormat,
    pipeline,
    services::{Eligibility, HttpPageFetcher},
    utils::date::parse_date,
};

const DEFAULT_CONFIG: &str = "course-scout.toml";

/// course-scout - find courses before their enrollment opens
#[derive(Parser, Debug)]
#[command(name = "course-scout", version, about = "Lists upcoming meditation courses")]
struct Cli {
    /// Configuration file (default: ./course-scout.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Student category
    #[arg(long, value_enum)]
    student: Option<StudentCategory>,

    /// Region name, e.g. Europe
    #[arg(short, long)]
    region: Option<String>,

    /// Course length in days (1, 2, 3, 10, 20, 30, 45 or 60)
    #[arg(short, long)]
    days: Option<u32>,

    /// Start of the search window, YYYY-MM-DD (default: today)
    #[arg(long)]
    from: Option<String>,

    /// End of the search window, YYYY-MM-DD (default: one year after --from)
    #[arg(long)]
    to: Option<String>,

    /// Show every course, including those already open for enrollment
    #[arg(short, long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log progress; repeat for request-level detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Default log filter for the verbosity flags.
///
/// Warnings only by default, so a failed run ends in just the diagnostic line.
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (_, true) => "error",
        (0, false) => "warn",
        (1, false) => "info",
        _ => "debug",
    }
}

/// Initialize logging based on verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = log_level(verbose, quiet);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load the configuration file, if any.
///
/// An explicitly named file must load; the default one is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let config = Config::load(path)?;
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load_or_default(DEFAULT_CONFIG),
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let options = SearchOptions {
        student: cli.student,
        region: cli.region,
        days: cli.days,
        from: cli.from.as_deref().map(|s| parse_date("--from", s)).transpose()?,
        to: cli.to.as_deref().map(|s| parse_date("--to", s)).transpose()?,
    };

    // Every parameter is resolved before the first request goes out.
    let today = Local::now().date_naive();
    let params = SearchParams::resolve(&config, options, today)?;

    let eligibility = if cli.all {
        Eligibility::All
    } else {
        Eligibility::NotYetOpen(params.window.reference_date())
    };

    let fetcher = HttpPageFetcher::new(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::run(&config, &params, eligibility, cli.format, &fetcher, &mut out)?;
    Ok(())
}

/// Main entry point for the CLI application.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("course-scout: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(0, true), "error");
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["course-scout", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["course-scout", "-v", "-q"]).is_err());
    }
}

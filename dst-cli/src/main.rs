//! dst CLI: download Disturbance Storm Time (DST) index data from the Kyoto
//! WDC archive.
//!
//! Forms:
//! - `dst --all`: everything from 1957 to the current year
//! - `dst --start-year <Y> --end-year <Y>`: an inclusive range of years
//!
//! Output goes to stdout unless `--output` names a file.

mod logging;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use dst_core::{DstArchive, DstConfig, ReqwestFetcher, StderrProgress, EARLIEST_YEAR};
use std::io::Write;
use std::path::{Path, PathBuf};

const EXAMPLES: &str = "\
Examples:
    $ dst --all
    DST5701*01  X219 000 011 013 012 012 009 007 007 006 002-001-007-007-008-001 ...
    ...
    $ dst --all --output dst.txt
    $ dst --start-year 1957 --end-year 2024
    $ dst --start-year 1957 --end-year 2024 --output dst.txt
    $ dst --start-year 2000 --end-year 2024 --dry-run";

#[derive(Parser, Debug)]
#[command(
    name = "dst",
    version,
    about = "Download Disturbance Storm Time (DST) index data (final, provisional, real-time) from 1957 onward",
    after_help = EXAMPLES,
    group(ArgGroup::new("range").required(true).args(["all", "start_year"])),
)]
struct Cli {
    /// Download everything from 1957 to the current year.
    #[arg(short, long, conflicts_with_all = ["start_year", "end_year"])]
    all: bool,

    /// Download interval start year (inclusive, 1957 or later).
    #[arg(short, long, requires = "end_year", allow_hyphen_values = true)]
    start_year: Option<i32>,

    /// Download interval end year (inclusive, not after the current year).
    #[arg(short, long, requires = "start_year", allow_hyphen_values = true)]
    end_year: Option<i32>,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long, env = "DST_CONFIG")]
    config: Option<PathBuf>,

    /// Print the query URLs that would be fetched and exit.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Report per-interval progress on stderr.
    #[arg(long, default_value_t = false)]
    progress: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Requested `(start, end)` years, or `None` for `--all`.
    fn years(&self) -> Option<(i32, i32)> {
        match (self.start_year, self.end_year) {
            (Some(start), Some(end)) if !self.all => Some((start, end)),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let fetcher = ReqwestFetcher::new(&config.http).context("build HTTP client")?;
    let archive = DstArchive::from_config(&config, fetcher);

    if cli.dry_run {
        let (start, end) = cli
            .years()
            .unwrap_or((EARLIEST_YEAR, archive.current_year()));
        for url in archive.query_urls(start, end)? {
            println!("{url}");
        }
        return Ok(());
    }

    let data = if cli.progress {
        let progress = StderrProgress;
        match cli.years() {
            Some((start, end)) => archive.fetch_range_with_progress(start, end, &progress)?,
            None => archive.fetch_all_with_progress(&progress)?,
        }
    } else {
        match cli.years() {
            Some((start, end)) => archive.fetch_range(start, end)?,
            None => archive.fetch_all()?,
        }
    };

    match &cli.output {
        Some(path) => write_output(path, &data)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&data).context("write to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }

    Ok(())
}

/// Config from `--config`/`DST_CONFIG`, or defaults.
fn load_config(path: Option<&Path>) -> Result<DstConfig> {
    match path {
        Some(path) => DstConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(DstConfig::default()),
    }
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data).with_context(|| format!("write output {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = data.len(), "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dst").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn all_flag() {
        let cli = parse(&["--all"]).unwrap();
        assert!(cli.all);
        assert_eq!(cli.years(), None);
    }

    #[test]
    fn explicit_range_with_short_flags() {
        let cli = parse(&["-s", "1957", "-e", "2024", "-o", "dst.txt"]).unwrap();
        assert_eq!(cli.years(), Some((1957, 2024)));
        assert_eq!(cli.output, Some(PathBuf::from("dst.txt")));
    }

    #[test]
    fn range_flags_must_come_together() {
        assert!(parse(&["--start-year", "1957"]).is_err());
        assert!(parse(&["--end-year", "2024"]).is_err());
    }

    #[test]
    fn all_conflicts_with_range() {
        assert!(parse(&["--all", "--start-year", "1957", "--end-year", "2024"]).is_err());
    }

    #[test]
    fn a_range_form_is_required() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--output", "dst.txt"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = parse(&["--all", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dst.txt");
        write_output(&path, b"DST5701*01\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"DST5701*01\n");
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }

    #[test]
    fn no_config_means_defaults() {
        assert_eq!(load_config(None).unwrap(), DstConfig::default());
    }
}

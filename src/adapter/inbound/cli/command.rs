//! Command-line interface definitions.
//!
//! Defines the CLI structure for oddsarb using `clap`: `run` performs one
//! detection pass, `report` turns the persisted logs into stake plans.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Default configuration file, read when present.
pub const DEFAULT_CONFIG_PATH: &str = "oddsarb.toml";

/// Sports-betting arbitrage detection CLI
#[derive(Parser, Debug)]
#[command(name = "oddsarb")]
#[command(version, about)]
pub struct Cli {
    /// Path to the configuration file (optional).
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch odds for every sport and record arbitrage opportunities
    Run(RunArgs),

    /// Print stake plans for the recorded opportunities
    Report(ReportArgs),
}

/// Arguments for `oddsarb run`.
#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Override the number of concurrent sport workers.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Override the minimum margin (percent) an opportunity must exceed.
    #[arg(long, allow_hyphen_values = true)]
    pub threshold: Option<f64>,

    /// Override the output directory.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Override the per-sport fetch timeout in seconds.
    #[arg(long)]
    pub fetch_timeout: Option<u64>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `oddsarb report`.
#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Bank to split across each opportunity's legs.
    #[arg(long, default_value = "1000")]
    pub bank: Decimal,

    /// Show at most this many opportunities.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Read logs from this directory instead of the configured one.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name() {
        assert_eq!(Cli::command().get_name(), "oddsarb");
    }

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::try_parse_from(["oddsarb", "run"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.workers.is_none());
        assert!(args.threshold.is_none());
        assert!(!args.json_logs);
    }

    #[test]
    fn parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "oddsarb",
            "run",
            "--workers",
            "8",
            "--threshold",
            "-1.5",
            "--output-dir",
            "out",
            "--fetch-timeout",
            "5",
            "--log-level",
            "debug",
            "--json-logs",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.workers, Some(8));
        assert_eq!(args.threshold, Some(-1.5));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.fetch_timeout, Some(5));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);
    }

    #[test]
    fn parse_report_defaults() {
        let cli = Cli::try_parse_from(["oddsarb", "report"]).unwrap();
        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.bank, dec!(1000));
        assert!(args.limit.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["oddsarb", "report", "--json", "-q", "--config", "x.toml"])
                .unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }
}

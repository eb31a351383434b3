use std::process::ExitCode;

use clap::Parser;
use oddsarb::adapter::inbound::cli::command::{Cli, Commands};
use oddsarb::adapter::inbound::cli::output::{self, OutputConfig};
use oddsarb::adapter::inbound::cli::{report, run};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let result = match &cli.command {
        Commands::Run(args) => run::execute(&cli.config, args).map(|_| ()),
        Commands::Report(args) => report::execute(&cli.config, args).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

//! Handler for the `run` command.

use std::path::Path;

use anyhow::Context;

use super::command::RunArgs;
use super::config::load_config;
use super::output;
use crate::application::scheduler::RunSummary;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::app::App;

/// Execute the run command.
///
/// Configuration is fully validated before the runtime starts, so a missing
/// API key fails without any network activity.
pub fn execute(config_path: &Path, args: &RunArgs) -> anyhow::Result<RunSummary> {
    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, args);
    config.validate()?;

    config.init_logging();
    print_startup(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers())
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let summary = runtime.block_on(App::run(&config))?;
    print_summary(&summary, &config.output.directory);
    Ok(summary)
}

/// Apply CLI flags on top of file and environment settings.
pub fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(workers) = args.workers {
        config.scheduler.worker_count = Some(workers);
    }
    if let Some(threshold) = args.threshold {
        config.detector.threshold_percent = threshold;
    }
    if let Some(dir) = &args.output_dir {
        config.output.directory = dir.to_string_lossy().into_owned();
    }
    if let Some(secs) = args.fetch_timeout {
        config.scheduler.fetch_timeout_secs = secs;
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
}

fn print_startup(config: &Config) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Provider", &config.odds_api.api_url);
    output::field("Workers", config.workers());
    output::field("Threshold", format!("{}%", config.detector.threshold_percent));
    output::field("Output", &config.output.directory);
}

fn print_summary(summary: &RunSummary, directory: &str) {
    output::section("Run complete");
    output::field("Sports", summary.sports);
    output::field("Processed", summary.processed);
    output::field("Skipped", summary.skipped);
    output::field("Matches", summary.matches);
    output::field("Opportunities", summary.opportunities);
    output::field("Elapsed", format!("{:.2}s", summary.elapsed.as_secs_f64()));

    if summary.store_failures > 0 {
        output::warning(&format!(
            "{} output writes failed, see log for details",
            summary.store_failures
        ));
    }
    if summary.opportunities > 0 {
        output::success(&format!("Opportunities written to {directory}"));
    } else {
        output::note("No arbitrage opportunities found");
    }
}

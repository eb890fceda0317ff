use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use channel_catalog::{
    cli::CommonArgs,
    validator::{StreamValidator, apply_limit, collect_urls},
};

#[derive(Parser)]
#[command(name = "validate-streams")]
#[command(version)]
#[command(about = "Check that every stream URL in the generated catalogs is reachable")]
struct Cli {
    /// Only check the first LIMIT URLs
    #[arg(value_name = "LIMIT")]
    limit: Option<usize>,

    /// Per-request timeout, e.g. "10s" (overrides config file)
    #[arg(short, long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Number of URLs checked at once (overrides config file)
    #[arg(short = 'j', long, value_name = "N")]
    concurrency: Option<usize>,

    /// Skip catalog documents that do not exist
    #[arg(long)]
    skip_missing: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = cli.common.init()?;

    if let Some(timeout) = cli.timeout {
        config.validator.timeout = timeout;
    }
    if let Some(concurrency) = cli.concurrency {
        config.validator.concurrency = concurrency;
    }
    if cli.skip_missing {
        config.validator.skip_missing = true;
    }
    config.validate()?;

    let urls = collect_urls(&config.validator_targets(), config.validator.skip_missing).await?;
    let urls = apply_limit(urls, cli.limit);

    let validator = StreamValidator::from_config(&config)?;
    let summary = validator.run(urls, &mut std::io::stdout().lock()).await?;

    Ok(ExitCode::from(summary.exit_code()))
}

use anyhow::Result;
use clap::Parser;

use channel_catalog::{cli::CommonArgs, readme::ReadmeRefresher};

#[derive(Parser)]
#[command(name = "generate-readme")]
#[command(version)]
#[command(about = "Stamp the last commit date into README.md")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.common.init()?;

    ReadmeRefresher::from_config(&config).refresh().await?;

    Ok(())
}

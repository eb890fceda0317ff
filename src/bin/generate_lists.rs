use anyhow::Result;
use clap::Parser;
use tracing::info;

use channel_catalog::{cli::CommonArgs, generator::ListGenerator};

#[derive(Parser)]
#[command(name = "generate-lists")]
#[command(version)]
#[command(about = "Render TELEVISION.md and RADIO.md from the YAML channel data")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.common.init()?;

    let generator = ListGenerator::from_config(&config);
    for document in generator.generate_all()? {
        info!("{} -> {}", document.kind, document.path.display());
    }

    Ok(())
}

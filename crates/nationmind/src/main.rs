use anyhow::Result;
use clap::Parser;
use nationmind::cli::{self, Cli};
use nationmind::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let cli = Cli::parse();
    let output = cli::execute(cli).await?;
    println!("{output}");
    Ok(())
}

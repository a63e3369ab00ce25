use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use departure_board::cli::{BoardArgs, init_tracing};
use departure_board::static_site::{DEFAULT_OUTPUT_DIR, generate};

/// Write a static snapshot of the departure board.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    board: BoardArgs,

    /// Directory to write index.html into
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let pipeline = args
        .board
        .pipeline()
        .context("failed to set up MVG provider")?;

    let path = generate(&pipeline, &args.output_dir).await?;
    println!("Static site generated successfully in {}", path.display());
    Ok(())
}

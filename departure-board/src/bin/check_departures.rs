use std::process::ExitCode;

use clap::Parser;

use departure_board::cli::{BoardArgs, init_tracing};
use departure_board::survey::{Survey, render_failure};

/// Print the departure board to the console.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    board: BoardArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let pipeline = match args.board.pipeline() {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("Error: failed to set up MVG provider: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Checking station ID for: {}", pipeline.config().station_name);

    match Survey::gather(&pipeline).await {
        Ok(survey) => {
            print!("{}", survey.render());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "departure check failed");
            print!("{}", render_failure(&err));
            ExitCode::FAILURE
        }
    }
}

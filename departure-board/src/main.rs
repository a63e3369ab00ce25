use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use departure_board::cli::{BoardArgs, init_tracing};
use departure_board::web::{AppState, create_router};

/// Serve the live departure board.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    board: BoardArgs,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    bind: SocketAddr,

    /// Directory served under `/static`
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let pipeline = args
        .board
        .pipeline()
        .context("failed to set up MVG provider")?;
    let config = pipeline.config().clone();

    let app = create_router(AppState::new(pipeline), args.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;

    info!(
        addr = %args.bind,
        station = %config.station_name,
        line = %config.line,
        direction = %config.direction,
        "departure board listening"
    );
    info!("GET  /                - HTML board");
    info!("GET  /api/departures  - formatted JSON");
    info!("GET  /raw             - raw JSON");
    info!("GET  /health          - health check");
    if let Some(dir) = &args.static_dir {
        info!(dir = %dir.display(), "GET  /static/*         - static files");
    }

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

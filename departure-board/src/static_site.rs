//! Static snapshot of the departure board.
//!
//! Renders the board into a single self-contained HTML file, suitable for
//! GitHub Pages or any static host. The page refreshes itself every five
//! minutes, so it stays current as long as something regenerates it.

use std::path::{Path, PathBuf};

use askama::Template;
use chrono::Local;
use tracing::info;

use crate::domain::TIME_FORMAT;
use crate::pipeline::{BoardConfig, DepartureBoard, DeparturePipeline, Envelope, TransitProvider};
use crate::web::{BoardView, StaticBoardTemplate};

/// Default directory the snapshot is written to.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

/// File name of the snapshot inside the output directory.
pub const OUTPUT_FILE: &str = "index.html";

/// Errors from generating the static site.
#[derive(Debug, thiserror::Error)]
pub enum StaticSiteError {
    /// Template rendering failed
    #[error("template error: {0}")]
    Render(#[from] askama::Error),

    /// Writing the output failed
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render an envelope into a standalone HTML page.
///
/// Error envelopes render as an error page; either way a page is produced.
pub fn render_static_page(
    envelope: &Envelope<DepartureBoard>,
    config: &BoardConfig,
    generated_at: &str,
) -> Result<String, StaticSiteError> {
    let template = StaticBoardTemplate {
        board: BoardView::from_envelope(envelope, config),
        generated_at: generated_at.to_string(),
    };
    Ok(template.render()?)
}

/// Write `html` to `output_dir/index.html`, creating the directory if
/// needed. Returns the path written.
pub fn write_static_site(output_dir: &Path, html: &str) -> Result<PathBuf, StaticSiteError> {
    std::fs::create_dir_all(output_dir).map_err(|source| StaticSiteError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(OUTPUT_FILE);
    std::fs::write(&path, html).map_err(|source| StaticSiteError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Run the pipeline once and write the snapshot.
pub async fn generate<P: TransitProvider>(
    pipeline: &DeparturePipeline<P>,
    output_dir: &Path,
) -> Result<PathBuf, StaticSiteError> {
    let envelope = pipeline.board().await;
    let generated_at = Local::now().format(TIME_FORMAT).to_string();

    let html = render_static_page(&envelope, pipeline.config(), &generated_at)?;
    let path = write_static_site(output_dir, &html)?;

    info!(
        path = %path.display(),
        error = envelope.error(),
        "static site generated"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawDeparture, StationInfo};
    use crate::mvg::MockMvgClient;
    use crate::pipeline::ErrorEnvelope;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn renders_snapshot_with_generation_time() {
        let envelope = Envelope::Success(DepartureBoard {
            station_name: "Olympiazentrum".into(),
            station_id: "de:09162:350".into(),
            place: "München".into(),
            line_number: "180".into(),
            direction: "Berduxstraße".into(),
            departures: vec![
                RawDeparture::new("180", "Berduxstraße")
                    .with_time(1_700_000_000)
                    .to_display_in(&Utc),
            ],
            last_update: "2023-11-14 23:13:20".into(),
        });

        let html =
            render_static_page(&envelope, &BoardConfig::default(), "2023-11-14 23:13:21").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("content=\"300\""));
        assert!(html.contains("Generated at 2023-11-14 23:13:21"));
        assert!(html.contains("2023-11-14 22:13:20"));
        assert!(html.contains("On Time"));
        // Self-contained: styles are inlined.
        assert!(html.contains(".departure-card"));
    }

    #[test]
    fn renders_error_page() {
        let envelope: Envelope<DepartureBoard> = Envelope::Failure(ErrorEnvelope {
            error: "An unexpected error occurred. Please try again later.".into(),
            station_name: "Olympiazentrum".into(),
        });

        let html =
            render_static_page(&envelope, &BoardConfig::default(), "2023-11-14 23:13:21").unwrap();
        assert!(html.contains("An unexpected error occurred"));
    }

    #[test]
    fn creates_output_directory() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("docs");

        let path = write_static_site(&output_dir, "<html></html>").unwrap();

        assert_eq!(path, output_dir.join("index.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn generate_writes_page() {
        let dir = tempdir().unwrap();
        let provider = MockMvgClient::new()
            .with_station(StationInfo::new("de:09162:350", "Olympiazentrum", "München"))
            .with_departures(vec![RawDeparture::new("180", "Berduxstraße")]);
        let pipeline = DeparturePipeline::new(provider, BoardConfig::default());

        let path = generate(&pipeline, dir.path()).await.unwrap();
        let html = std::fs::read_to_string(path).unwrap();

        assert!(html.contains("Upcoming Departures"));
        assert!(html.contains("Generated at"));
    }

    #[tokio::test]
    async fn generate_writes_error_page_on_failure() {
        let dir = tempdir().unwrap();
        let pipeline = DeparturePipeline::new(MockMvgClient::new(), BoardConfig::default());

        let path = generate(&pipeline, dir.path()).await.unwrap();
        let html = std::fs::read_to_string(path).unwrap();

        assert!(html.contains("Could not find station"));
    }
}

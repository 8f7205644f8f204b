//! Renders the demo scene to a PNG file.
//!
//! Usage: `example [OUTPUT]`, writing to `shadows.png` by default. Set
//! `RUST_LOG=umbra=trace` to log every silhouette edge.

mod scene;

use std::path::PathBuf;

use tracing::info;
use umbra::{CasterConfig, RasterSurface, ShadowCaster};

use crate::scene::{DemoConfig, Scene};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("shadows.png"));

    let config = DemoConfig::default();
    let caster = ShadowCaster::new(CasterConfig::from_surface_width(config.width as f32));
    let mut canvas = RasterSurface::with_background(config.width, config.height, config.background);

    Scene::new().draw(&mut canvas, &caster, &config);

    canvas.save_png(&output)?;
    info!(path = %output.display(), "rendered shadow demo");
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,umbra=info,example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use prism_engine::RenderSettings;

/// Renders the demo scene and writes the last frame as SVG.
#[derive(Parser, Debug)]
#[command(name = "prism-studio", about = "Prism painter's-algorithm renderer demo", version)]
pub struct Args {
    /// Output width in pixels.
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Output height in pixels.
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Frames to render; the scene turns a little each frame.
    #[arg(long, default_value = "60")]
    pub frames: u32,

    /// SVG file for the last frame.
    #[arg(short, long, default_value = "prism.svg")]
    pub output: PathBuf,

    /// Keep sub-pixel output coordinates.
    #[arg(long)]
    pub fractional_points: bool,

    /// Draw surfaces facing away from the viewer.
    #[arg(long)]
    pub no_cull: bool,

    /// Rebuild every render record each frame.
    #[arg(long)]
    pub no_cache: bool,

    /// Log filter (`env_logger` syntax); overrides `RUST_LOG`.
    #[arg(long)]
    pub log: Option<String>,
}

impl Args {
    pub fn settings(&self) -> RenderSettings {
        RenderSettings::default()
            .with_cull_backfaces(!self.no_cull)
            .with_fractional_points(self.fractional_points)
            .with_cache(!self.no_cache)
    }
}

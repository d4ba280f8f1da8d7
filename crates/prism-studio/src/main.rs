mod args;
mod demo;
mod svg;

use std::f32::consts::TAU;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use prism_engine::logging::{init_logging, LoggingConfig};

use crate::args::Args;
use crate::demo::Demo;

/// Spin per frame: one full turn every four seconds at 60 frames per second.
const TURN_PER_FRAME: f32 = TAU / 240.0;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    ensure!(
        args.width > 0 && args.height > 0,
        "output size must be non-zero, got {}x{}",
        args.width,
        args.height
    );
    ensure!(args.frames > 0, "at least one frame is required");

    let (width, height) = (args.width as f32, args.height as f32);
    let mut demo = Demo::new(width, height);
    demo.scene.settings = args.settings();
    demo.scene.validate().context("demo scene has an unusable camera or viewport")?;
    log::info!("rendering {} frames at {}x{} ({:?})", args.frames, args.width, args.height, demo.scene.settings);

    for frame in 1..args.frames {
        demo.scene.render();
        log::debug!("frame {frame}: {:?}", demo.scene.last_frame_stats());
        demo.advance(TURN_PER_FRAME);
    }

    let document = svg::render_svg(&demo.scene.render(), width, height)
        .context("failed to format the frame as SVG")?;
    std::fs::write(&args.output, document)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    let stats = demo.scene.last_frame_stats();
    log::info!(
        "wrote {}: {} polygons ({} surfaces, {} culled, cache {} hits / {} misses)",
        args.output.display(),
        stats.emitted,
        stats.surfaces,
        stats.culled(),
        stats.cache_hits,
        stats.cache_misses,
    );
    Ok(())
}

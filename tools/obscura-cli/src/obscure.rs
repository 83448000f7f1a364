//! The capture → enumerate → pixelate → write pipeline.

use std::path::PathBuf;

use anyhow::Context;
use obscura_platform_x11::Display;
use obscura_processing::pixelate_all;

/// One end-to-end run. Each step is a hard prerequisite for the next;
/// connection, capture, and write failures are fatal, while per-window
/// failures were already swallowed during enumeration.
pub fn run(dest: PathBuf) -> anyhow::Result<()> {
    let display = Display::connect().context("cannot open display")?;

    let rects = display.visible_window_rects();
    tracing::info!(windows = rects.len(), "discovered visible windows");

    let mut canvas = display.capture_screen().context("screen capture failed")?;
    pixelate_all(&mut canvas, &rects);

    canvas
        .save(&dest)
        .with_context(|| format!("failed to write output image to {}", dest.display()))?;

    let (width, height) = display.dimensions();
    tracing::info!(
        path = %dest.display(),
        width,
        height,
        "wrote obscured screenshot"
    );

    Ok(())
}

/// Print the discovered window rectangles as JSON lines, without
/// capturing or writing anything.
pub fn list_windows() -> anyhow::Result<()> {
    let display = Display::connect().context("cannot open display")?;

    for rect in display.visible_window_rects() {
        println!("{}", serde_json::to_string(&rect)?);
    }

    Ok(())
}

//! Scripted editing session that logs every frame pushed to the surface.
//!
//! ```text
//! cargo run --example session
//! RUST_LOG=mapshape=trace cargo run --example session
//! ```

use mapshape::render::{RenderFrame, RenderSurface, ShapePrimitive};
use mapshape::{Editor, EditorConfig, LatLng, Phase, PointerEvent, Target};

/// Surface that only reports what it would draw.
struct LogSurface;

impl RenderSurface for LogSurface {
    fn render(&mut self, frame: &RenderFrame) {
        let shape = match &frame.shape {
            Some(ShapePrimitive::ClosedFill { path, .. }) => format!("fill({})", path.len()),
            Some(ShapePrimitive::OpenStroke { path, .. }) => format!("stroke({})", path.len()),
            None => "none".to_owned(),
        };
        tracing::info!(shape, markers = frame.markers.len(), "frame");
    }
}

fn main() -> mapshape::Result<()> {
    // Default: WARN for everything, INFO for mapshape and this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("session=info".parse().unwrap_or_default())
        .add_directive("mapshape=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut editor = Editor::new(Phase::Creating, EditorConfig::default(), LogSurface)?;

    for (lat, lng) in [(47.50, 19.03), (47.50, 19.06), (47.52, 19.06), (47.52, 19.03)] {
        editor.handle(&PointerEvent::tap(Target::Map, LatLng::new(lat, lng)));
    }
    editor.handle(&PointerEvent::tap(Target::Vertex(0), LatLng::new(47.50, 19.03)));

    // Pull the first edge outwards through its midpoint handle.
    let handle = editor.midpoints()[0];
    editor.handle(&PointerEvent::drag_start(Target::Midpoint(0), handle));
    for step in 1..=10 {
        let p = LatLng::new(handle.lat - 0.001 * f64::from(step), handle.lng);
        editor.handle(&PointerEvent::drag_update(p));
    }
    editor.handle(&PointerEvent::drag_end(LatLng::new(handle.lat - 0.01, handle.lng)));

    tracing::info!(vertices = ?editor.store().points(), "final shape");
    Ok(())
}

//! Runs a seeded field without a display and logs what each phase draws.
//!
//! ```text
//! RUST_LOG=debug cargo run --example headless -- '{"seed": 7}'
//! ```

use neural_field::prelude::*;

const FRAMES: u32 = 600;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(json) => FieldConfig::from_json(&json)?,
        None => FieldConfig {
            seed: Some(7),
            ..FieldConfig::default()
        },
    };

    let size = SurfaceSize::new(1280, 720);
    let mut animation =
        Animation::seeded(&config, size, RecordingSurface::new(), &mut config.rng());
    animation.start();

    let mut visible_edges = 0;
    for frame in 0..FRAMES {
        if frame == FRAMES / 2 {
            animation.resize(1920, 720);
        }
        animation.frame();
        visible_edges += animation.surface().lines().count();

        if frame % 100 == 0 {
            log::info!(
                "frame {frame}: {} of {} edges visible",
                animation.surface().lines().count(),
                animation.simulator().edge_count()
            );
        }
    }

    animation.stop();
    let status = animation.frame();
    log::info!(
        "{} frames drawn, {:.1} edges visible on average, final status {status:?}",
        animation.surface().frames,
        visible_edges as f64 / FRAMES as f64
    );
    Ok(())
}

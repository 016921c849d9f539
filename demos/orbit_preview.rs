//! Headless preview of the hero scene.
//!
//! Mounts the site scene, steps two seconds at 60 fps and logs where each
//! animated entity ends up. Pass a JSON config path to override defaults.
//!
//! ```text
//! RUST_LOG=info cargo run --example orbit_preview [config.json]
//! ```

use anyhow::Context;

use hisl_scene::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            SceneConfig::from_json_str(&json)?
        }
        None => SceneConfig::default(),
    };

    let mut frame = FrameLoop::new();
    let site = SiteScene::mount(&mut frame, &config)?;

    for i in 0..=120 {
        let stats = frame.tick_at(i as f32 / 60.0);
        if i % 30 == 0 {
            log::info!(
                "frame {} t={:.2}s wrote {} transform(s)",
                stats.frame,
                stats.time,
                stats.transforms_written
            );
        }
    }

    for (handle, node) in frame.scene.iter_mounted() {
        let t = &node.transform;
        log::info!(
            "{:<18} {:>6} pos=({:+.3}, {:+.3}, {:+.3}) rot={:+.3} scale={:.3}",
            node.name,
            node.primitive.kind_name(),
            t.position.x,
            t.position.y,
            t.position.z,
            t.rotation,
            t.scale.x,
        );
        log::debug!("  handle {handle:?}");
    }

    let removed = site.unmount(&mut frame);
    log::info!("Unmounted {removed} entities");
    Ok(())
}

//! Per-frame cost of the decorative scene.
//!
//! Run with: `cargo bench --bench animation_bench`

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use hisl_scene::animation::{Animator, OrbitAnimator, OrbitPath, PulseTrailAnimator, TRAIL_SEGMENTS};
use hisl_scene::app::FrameLoop;
use hisl_scene::config::SceneConfig;
use hisl_scene::presets::PulseTrail;

fn bench_animators(c: &mut Criterion) {
    let config = SceneConfig::default();
    let orbit = OrbitAnimator::new(
        OrbitPath::new(4.0, 0.3, 0.0).with_bob(0.8, 0.4),
        config.ravens.scale,
    );
    let trail = PulseTrailAnimator::new(config.pulse_trail.curve(), config.pulse_trail.motion());

    c.bench_function("orbit_pose", |b| {
        let mut t = 0.0_f32;
        b.iter(|| {
            t += 1.0 / 60.0;
            black_box(orbit.pose(black_box(t)))
        });
    });

    c.bench_function("pulse_trail_pose", |b| {
        let mut t = 0.0_f32;
        b.iter(|| {
            t += 1.0 / 60.0;
            black_box(trail.pose(black_box(t)))
        });
    });

    c.bench_function("bezier_polyline", |b| {
        let curve = config.pulse_trail.curve();
        b.iter(|| black_box(curve.sample_points(TRAIL_SEGMENTS)));
    });
}

fn bench_frame(c: &mut Criterion) {
    // Textures are left out so the loop measures only the animation path.
    let mut frame = FrameLoop::new();
    PulseTrail::mount(&mut frame, &SceneConfig::default().pulse_trail);

    c.bench_function("frame_tick", |b| {
        let mut t = 0.0_f32;
        b.iter(|| {
            t += 1.0 / 60.0;
            black_box(frame.tick_at(t))
        });
    });
}

criterion_group!(benches, bench_animators, bench_frame);
criterion_main!(benches);

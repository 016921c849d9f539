use std::sync::Arc;

use glam::Vec3;

use crate::animation::{Animator, Channels, PulseTrailAnimator};
use crate::app::FrameLoop;
use crate::config::PulseTrailConfig;
use crate::scene::{Light, Line, Mesh, Node, NodeHandle, Primitive, SphereGeometry, Transform};

/// The "data transmission" trail: a static curve line plus a pulsing marker
/// sphere travelling along it, lit by a point light that rides with it.
#[derive(Debug, Clone, Copy)]
pub struct PulseTrail {
    pub line: NodeHandle,
    pub marker: NodeHandle,
    pub glow: NodeHandle,
}

impl PulseTrail {
    pub fn mount(frame: &mut FrameLoop, config: &PulseTrailConfig) -> Self {
        let animator = Arc::new(PulseTrailAnimator::new(config.curve(), config.motion()));

        let line = frame.scene.mount(
            "PulseTrail.Line",
            Primitive::Line(Line {
                points: animator.polyline().to_vec(),
                color: Vec3::from_array(config.line_color),
                opacity: config.line_opacity,
            }),
        );

        let start = animator.pose(0.0);
        let mut marker_transform = Transform::new();
        start.apply_to(&mut marker_transform);

        let marker_color = Vec3::from_array(config.marker_color);
        let marker = frame.scene.mount_node(
            Node::new(
                "PulseTrail.Marker",
                Primitive::Mesh(Mesh {
                    geometry: SphereGeometry::default(),
                    color: marker_color,
                    emissive: marker_color,
                    emissive_intensity: 1.5,
                }),
            )
            .with_transform(marker_transform),
        );

        let glow = frame.scene.mount_node(
            Node::new(
                "PulseTrail.Glow",
                Primitive::Light(Light::new_point(
                    marker_color,
                    config.light_intensity,
                    config.light_distance,
                )),
            )
            .with_transform(Transform::from_position(start.position)),
        );

        frame.driver.bind(marker, animator.clone());
        frame.driver.bind_channels(glow, animator, Channels::Position);

        log::info!("Mounted pulse trail");
        Self { line, marker, glow }
    }

    /// Unmounts the line, marker and glow. Returns how many were still mounted.
    pub fn unmount(self, frame: &mut FrameLoop) -> usize {
        [self.line, self.marker, self.glow]
            .into_iter()
            .filter(|&handle| frame.unmount(handle))
            .count()
    }
}

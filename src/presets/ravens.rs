use std::sync::Arc;

use glam::Vec3;

use crate::animation::{Animator, OrbitAnimator};
use crate::app::FrameLoop;
use crate::assets::AssetSource;
use crate::config::RavenConfig;
use crate::scene::{Node, NodeHandle, Primitive, Sprite, SpriteMaterial, Transform};

/// The orbiting raven sprites.
///
/// Each orbiter in the config becomes one tinted sprite circling the origin.
/// All sprites share one texture request; until it resolves, or if it fails,
/// they render as flat tinted quads.
#[derive(Debug, Clone)]
pub struct NorseRavens {
    pub sprites: Vec<NodeHandle>,
}

impl NorseRavens {
    pub fn mount(frame: &mut FrameLoop, config: &RavenConfig) -> Self {
        let mut sprites = Vec::with_capacity(config.orbiters.len());

        for orbiter in &config.orbiters {
            let animator = Arc::new(OrbitAnimator::new(config.orbit_path(orbiter), config.scale));

            let mut transform = Transform::new();
            animator.pose(0.0).apply_to(&mut transform);

            let sprite = Sprite {
                material: SpriteMaterial {
                    color: Vec3::from_array(orbiter.tint),
                    opacity: config.opacity,
                    ..SpriteMaterial::default()
                },
            };
            let node = Node::new(&orbiter.name, Primitive::Sprite(sprite)).with_transform(transform);
            let handle = frame.scene.mount_node(node);

            frame.driver.bind(handle, animator);
            let request = frame
                .assets
                .request_texture(AssetSource::path(&config.texture));
            frame.attach_texture(handle, request);
            sprites.push(handle);
        }

        log::info!("Mounted {} raven(s)", sprites.len());
        Self { sprites }
    }

    /// Unmounts every sprite. Returns how many were still mounted.
    pub fn unmount(self, frame: &mut FrameLoop) -> usize {
        self.sprites
            .into_iter()
            .filter(|&handle| frame.unmount(handle))
            .count()
    }
}

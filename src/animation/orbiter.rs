use glam::Vec3;

use crate::animation::Animator;
use crate::animation::orbit::OrbitPath;
use crate::animation::pose::Pose;

/// Flies a sprite around an [`OrbitPath`], turning it to face its direction
/// of travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAnimator {
    pub path: OrbitPath,
    /// Constant uniform scale.
    pub scale: f32,
}

impl OrbitAnimator {
    #[must_use]
    pub fn new(path: OrbitPath, scale: f32) -> Self {
        Self { path, scale }
    }
}

impl Animator for OrbitAnimator {
    fn pose(&self, t: f32) -> Pose {
        Pose::new(
            self.path.position_at(t),
            self.path.facing_at(t),
            Vec3::splat(self.scale),
        )
    }
}

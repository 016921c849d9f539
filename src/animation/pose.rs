use glam::Vec3;

use crate::scene::Transform;

/// A transform computed for one instant.
///
/// Produced by an [`Animator`](crate::animation::Animator) from elapsed time
/// alone and copied into a [`Transform`] by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Facing angle in radians.
    pub rotation: f32,
    pub scale: Vec3,
}

impl Pose {
    #[must_use]
    pub fn new(position: Vec3, rotation: f32, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// A pose with no rotation and a uniform scale.
    #[must_use]
    pub fn at(position: Vec3, scale: f32) -> Self {
        Self::new(position, 0.0, Vec3::splat(scale))
    }

    pub fn apply_to(&self, transform: &mut Transform) {
        transform.position = self.position;
        transform.rotation = self.rotation;
        transform.scale = self.scale;
    }
}

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

/// Circular orbit around the origin in the XZ plane, with a vertical bob.
///
/// All quantities are in scene units, radians and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    pub radius: f32,
    /// Radians per second; negative values orbit clockwise.
    pub angular_speed: f32,
    /// Starting angle at `t = 0`.
    pub phase_offset: f32,
    /// Radians per second of the vertical bob.
    pub vertical_speed: f32,
    pub vertical_amplitude: f32,
}

impl OrbitPath {
    #[must_use]
    pub fn new(radius: f32, angular_speed: f32, phase_offset: f32) -> Self {
        Self {
            radius,
            angular_speed,
            phase_offset,
            vertical_speed: 0.0,
            vertical_amplitude: 0.0,
        }
    }

    #[must_use]
    pub fn with_bob(mut self, vertical_speed: f32, vertical_amplitude: f32) -> Self {
        self.vertical_speed = vertical_speed;
        self.vertical_amplitude = vertical_amplitude;
        self
    }

    /// Orbit angle at time `t`.
    #[inline]
    #[must_use]
    pub fn angle_at(&self, t: f32) -> f32 {
        t * self.angular_speed + self.phase_offset
    }

    #[must_use]
    pub fn position_at(&self, t: f32) -> Vec3 {
        let (sin, cos) = self.angle_at(t).sin_cos();
        Vec3::new(
            cos * self.radius,
            (t * self.vertical_speed).sin() * self.vertical_amplitude,
            sin * self.radius,
        )
    }

    /// Facing angle that keeps a sprite's forward axis on the tangent of travel.
    #[must_use]
    pub fn facing_at(&self, t: f32) -> f32 {
        let p = self.position_at(t);
        p.z.atan2(p.x) + FRAC_PI_2
    }
}

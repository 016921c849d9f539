use glam::Vec3;

use crate::animation::Animator;
use crate::animation::bezier::QuadraticBezier;
use crate::animation::pose::Pose;

/// Resolution of the static trail polyline.
pub const TRAIL_SEGMENTS: usize = 50;

/// Marker travel and pulse parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseMotion {
    /// Curve traversals per second.
    pub speed: f32,
    pub base_size: f32,
    pub amplitude: f32,
    /// Radians per second of the size pulse.
    pub frequency: f32,
}

/// Moves a pulsing marker along a fixed quadratic Bezier curve.
///
/// The curve and its polyline are built once; the marker's pose is a pure
/// function of elapsed time, so the travel cycle wraps back to `start`
/// without accumulated drift.
#[derive(Debug, Clone)]
pub struct PulseTrailAnimator {
    curve: QuadraticBezier,
    polyline: Vec<Vec3>,
    motion: PulseMotion,
}

impl PulseTrailAnimator {
    #[must_use]
    pub fn new(curve: QuadraticBezier, motion: PulseMotion) -> Self {
        Self {
            polyline: curve.sample_points(TRAIL_SEGMENTS),
            curve,
            motion,
        }
    }

    #[inline]
    #[must_use]
    pub fn curve(&self) -> &QuadraticBezier {
        &self.curve
    }

    #[inline]
    #[must_use]
    pub fn motion(&self) -> &PulseMotion {
        &self.motion
    }

    /// Precomputed static trail, `TRAIL_SEGMENTS + 1` points.
    #[inline]
    #[must_use]
    pub fn polyline(&self) -> &[Vec3] {
        &self.polyline
    }

    /// Curve parameter of the marker, always in `[0, 1)`.
    #[must_use]
    pub fn progress_at(&self, t: f32) -> f32 {
        let u = (t * self.motion.speed).rem_euclid(1.0);
        // rem_euclid rounds up to 1.0 for inputs a hair below an integer
        if u >= 1.0 { 0.0 } else { u }
    }

    #[must_use]
    pub fn marker_position(&self, t: f32) -> Vec3 {
        self.curve.point_at(self.progress_at(t))
    }

    /// Pulsing marker size, independent of curve progress.
    #[must_use]
    pub fn marker_scale(&self, t: f32) -> f32 {
        self.motion.base_size + self.motion.amplitude * (t * self.motion.frequency).sin()
    }
}

impl Animator for PulseTrailAnimator {
    fn pose(&self, t: f32) -> Pose {
        Pose::at(self.marker_position(t), self.marker_scale(t))
    }
}

use glam::Vec3;

/// Quadratic Bezier curve through `start` and `end`, pulled toward `control`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticBezier {
    #[must_use]
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Evaluates the curve at `u` in `[0, 1]`.
    ///
    /// Returns `start` exactly at `u = 0` and `end` exactly at `u = 1`.
    #[must_use]
    pub fn point_at(&self, u: f32) -> Vec3 {
        let v = 1.0 - u;
        self.start * (v * v) + self.control * (2.0 * v * u) + self.end * (u * u)
    }

    /// First derivative with respect to `u`.
    #[must_use]
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        (self.control - self.start) * (2.0 * (1.0 - u)) + (self.end - self.control) * (2.0 * u)
    }

    /// `segments + 1` points at uniformly spaced parameters, both ends included.
    #[must_use]
    pub fn sample_points(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32))
            .collect()
    }
}

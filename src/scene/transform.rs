use glam::{Affine3A, Quat, Vec3};

/// Transform component.
///
/// The mutable record the host renderer reads every frame: position,
/// per-axis scale and a scalar facing angle. Sprites interpret `rotation` as
/// their in-plane rotation; meshes and lights rotate about the view (Z) axis.
///
/// Caches the local matrix and only rebuilds it when one of the public
/// fields changed since the last [`update_local_matrix`](Self::update_local_matrix).
#[derive(Debug, Clone)]
pub struct Transform {
    // === Public properties ===
    pub position: Vec3,
    /// Facing angle in radians.
    pub rotation: f32,
    pub scale: Vec3,

    // === Matrix cache ===
    local_matrix: Affine3A,

    // === Shadow state for dirty checking ===
    last_position: Vec3,
    last_rotation: f32,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: 0.0,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Creates a transform placed at `position`.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    /// Sets a uniform scale on all three axes.
    #[inline]
    pub fn set_uniform_scale(&mut self, factor: f32) {
        self.scale = Vec3::splat(factor);
    }

    // ========================================================================
    // Dirty-checked matrix update
    // ========================================================================

    /// Rebuilds the local matrix if any public property changed.
    ///
    /// Returns `true` when the matrix was recomputed.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.local_matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                Quat::from_rotation_z(self.rotation),
                self.position,
            );

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// Forces the next [`update_local_matrix`](Self::update_local_matrix) to rebuild.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

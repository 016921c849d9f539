use std::sync::Arc;

use crate::animation::Animator;
use crate::animation::pose::Pose;
use crate::scene::{NodeHandle, Scene};

/// Which parts of a [`Pose`] a binding writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Position, rotation and scale.
    All,
    /// Position only; rotation and scale keep whatever the entity was mounted with.
    Position,
}

struct Binding {
    node: NodeHandle,
    animator: Arc<dyn Animator>,
    channels: Channels,
}

/// Per-frame animation driver.
///
/// Holds `(entity, animator)` bindings and, on every tick, writes each
/// animator's pose for the given elapsed time into the entity's transform.
/// Entities are referenced by handle only; mounting and unmounting stay with
/// the [`Scene`].
#[derive(Default)]
pub struct AnimationDriver {
    bindings: Vec<Binding>,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives every channel of `node` from `animator`.
    pub fn bind(&mut self, node: NodeHandle, animator: Arc<dyn Animator>) {
        self.bind_channels(node, animator, Channels::All);
    }

    pub fn bind_channels(
        &mut self,
        node: NodeHandle,
        animator: Arc<dyn Animator>,
        channels: Channels,
    ) {
        log::debug!("Binding animator to {node:?} ({channels:?})");
        self.bindings.push(Binding {
            node,
            animator,
            channels,
        });
    }

    /// Drops every binding for `node`. Returns how many were removed.
    pub fn unbind(&mut self, node: NodeHandle) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.node != node);
        before - self.bindings.len()
    }

    /// Drops bindings whose entity is no longer mounted.
    pub fn prune(&mut self, scene: &Scene) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|b| scene.is_mounted(b.node));
        let removed = before - self.bindings.len();
        if removed > 0 {
            log::debug!("Pruned {removed} binding(s) for unmounted entities");
        }
        removed
    }

    /// Frame tick: applies the pose for elapsed time `t` (seconds) to every
    /// mounted bound entity.
    ///
    /// Unmounted entities receive no update. Returns how many transforms
    /// were written.
    pub fn tick(&self, scene: &mut Scene, t: f32) -> usize {
        let mut written = 0;
        for binding in &self.bindings {
            let Some(transform) = scene.transform_mut(binding.node) else {
                continue;
            };
            let pose = binding.animator.pose(t);
            match binding.channels {
                Channels::All => pose.apply_to(transform),
                Channels::Position => transform.position = pose.position,
            }
            written += 1;
        }
        written
    }

    /// Pose the first binding of `node` would produce at `t`.
    #[must_use]
    pub fn pose_of(&self, node: NodeHandle, t: f32) -> Option<Pose> {
        self.bindings
            .iter()
            .find(|b| b.node == node)
            .map(|b| b.animator.pose(t))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

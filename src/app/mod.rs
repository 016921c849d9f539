//! Frame loop
//!
//! Stand-in for the host's frame scheduler. Owns the scene, the asset server
//! and the animation driver, and runs one synchronous update per frame:
//!
//! 1. Settle texture requests that finished since the last frame.
//! 2. Hand the elapsed session time to the [`AnimationDriver`].
//!
//! Nothing in a tick blocks or performs I/O.

use std::time::Duration;

use crate::animation::AnimationDriver;
use crate::assets::{AssetServer, TextureRequest, TextureSlot};
use crate::scene::{NodeHandle, Scene};
use crate::utils::Timer;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Elapsed session time passed to the driver.
    pub time: f32,
    pub frame: u64,
    pub transforms_written: usize,
    /// Texture requests that left the pending list (settled, or their sprite is gone).
    pub textures_settled: usize,
}

pub struct FrameLoop {
    pub scene: Scene,
    pub assets: AssetServer,
    pub driver: AnimationDriver,
    timer: Timer,
    pending_textures: Vec<(NodeHandle, TextureRequest)>,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::with_assets(AssetServer::new())
    }

    #[must_use]
    pub fn with_assets(assets: AssetServer) -> Self {
        Self {
            scene: Scene::new(),
            assets,
            driver: AnimationDriver::new(),
            timer: Timer::new(),
            pending_textures: Vec::new(),
        }
    }

    /// Routes a texture load into the material of the sprite `node` once it
    /// settles.
    pub fn attach_texture(&mut self, node: NodeHandle, request: TextureRequest) {
        self.pending_textures.push((node, request));
    }

    /// Number of texture loads not yet settled.
    #[must_use]
    pub fn pending_textures(&self) -> usize {
        self.pending_textures.len()
    }

    /// Runs one frame at the wall-clock elapsed time.
    pub fn tick(&mut self) -> FrameStats {
        self.timer.tick();
        let time = self.timer.elapsed_seconds();
        self.run_frame(time)
    }

    /// Runs one frame at an explicit elapsed time, in seconds.
    ///
    /// Used by hosts that own their clock, and by tests. Non-finite or
    /// negative times are clamped to the current session time.
    pub fn tick_at(&mut self, seconds: f32) -> FrameStats {
        let current = self.timer.elapsed_seconds();
        let time = if seconds.is_finite() { seconds.max(current) } else { current };
        let elapsed = Duration::try_from_secs_f32(time).unwrap_or(self.timer.elapsed);
        self.timer.tick_to(elapsed);
        self.run_frame(time)
    }

    /// Unmounts an entity and stops everything that targets it.
    pub fn unmount(&mut self, node: NodeHandle) -> bool {
        self.driver.unbind(node);
        self.pending_textures.retain(|(n, _)| *n != node);
        self.scene.unmount(node)
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.timer.elapsed_seconds()
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count
    }

    fn run_frame(&mut self, time: f32) -> FrameStats {
        let textures_settled = self.settle_textures();
        let transforms_written = self.driver.tick(&mut self.scene, time);
        self.scene.update_matrices();

        FrameStats {
            time,
            frame: self.timer.frame_count,
            transforms_written,
            textures_settled,
        }
    }

    fn settle_textures(&mut self) -> usize {
        let scene = &mut self.scene;
        let before = self.pending_textures.len();

        self.pending_textures.retain_mut(|(node, request)| {
            let slot = request.poll();
            if slot == TextureSlot::Pending {
                return scene.is_mounted(*node);
            }
            if let Some(sprite) = scene
                .get_node_mut(*node)
                .and_then(|n| n.primitive.as_sprite_mut())
            {
                sprite.material.map = slot;
            }
            false
        });

        before - self.pending_textures.len()
    }
}

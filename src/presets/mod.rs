//! Decorative presets
//!
//! Builders that mount the site's scene into a [`FrameLoop`] and register
//! their animators with its driver.

pub mod pulse_trail;
pub mod ravens;

pub use pulse_trail::PulseTrail;
pub use ravens::NorseRavens;

use glam::Vec3;

use crate::app::FrameLoop;
use crate::config::SceneConfig;
use crate::errors::Result;
use crate::scene::{Light, NodeHandle, Primitive};

/// Everything the hero scene mounts.
#[derive(Debug, Clone)]
pub struct SiteScene {
    pub ambient: NodeHandle,
    pub ravens: NorseRavens,
    pub trail: PulseTrail,
}

impl SiteScene {
    /// Validates `config` and mounts the scene.
    ///
    /// Nothing is mounted when the config is rejected.
    pub fn mount(frame: &mut FrameLoop, config: &SceneConfig) -> Result<Self> {
        config.validate()?;
        let ambient = frame.scene.mount(
            "Ambient",
            Primitive::Light(Light::new_ambient(Vec3::ONE, config.ambient_intensity)),
        );
        let ravens = NorseRavens::mount(frame, &config.ravens);
        let trail = PulseTrail::mount(frame, &config.pulse_trail);
        Ok(Self {
            ambient,
            ravens,
            trail,
        })
    }

    /// Tears the whole subtree down. Returns how many entities were unmounted.
    pub fn unmount(self, frame: &mut FrameLoop) -> usize {
        let ambient = usize::from(frame.unmount(self.ambient));
        ambient + self.ravens.unmount(frame) + self.trail.unmount(frame)
    }
}

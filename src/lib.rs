//! # HISL Scene
//!
//! Decorative 3D scene animation for the HISL site: two raven sprites
//! orbiting the origin and a pulsing marker travelling a Bezier "data path".
//!
//! Every animator is a pure function of elapsed session time; the
//! [`AnimationDriver`] writes the resulting poses into the transforms of
//! mounted scene entities once per frame.
//!
//! ```rust,ignore
//! use hisl_scene::prelude::*;
//!
//! let mut frame = FrameLoop::new();
//! let site = SiteScene::mount(&mut frame, &SceneConfig::default())?;
//! loop {
//!     frame.tick();
//!     // hand `frame.scene` to the renderer
//! }
//! ```

pub mod animation;
pub mod app;
pub mod assets;
pub mod config;
pub mod errors;
pub mod presets;
pub mod scene;
pub mod utils;

pub use animation::{AnimationDriver, Animator, OrbitAnimator, OrbitPath, Pose, PulseTrailAnimator, QuadraticBezier};
pub use app::{FrameLoop, FrameStats};
pub use assets::{AssetServer, AssetSource, TextureSlot};
pub use config::SceneConfig;
pub use errors::{Result, SceneError};
pub use scene::{EntityState, Node, NodeHandle, Primitive, Scene, Transform};

pub mod prelude {
    pub use crate::animation::{AnimationDriver, Animator, Channels, OrbitPath, Pose, QuadraticBezier};
    pub use crate::app::FrameLoop;
    pub use crate::assets::{AssetServer, AssetSource, TextureSlot};
    pub use crate::config::SceneConfig;
    pub use crate::presets::{NorseRavens, PulseTrail, SiteScene};
    pub use crate::scene::{NodeHandle, Scene, Transform};
}

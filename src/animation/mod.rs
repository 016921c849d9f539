//! Animation module
//!
//! Parametric, time-driven motion for the decorative scene. Every animator
//! maps elapsed seconds to a [`Pose`] with no internal state, so playback is
//! deterministic and restartable from any timestamp.
//!
//! - [`OrbitPath`] / [`OrbitAnimator`]: circular orbits with a vertical bob
//! - [`QuadraticBezier`] / [`PulseTrailAnimator`]: a pulsing marker looping along a curve
//! - [`AnimationDriver`]: writes poses into scene transforms once per frame

pub mod bezier;
pub mod driver;
pub mod orbit;
pub mod orbiter;
pub mod pose;
pub mod trail;

pub use bezier::QuadraticBezier;
pub use driver::{AnimationDriver, Channels};
pub use orbit::OrbitPath;
pub use orbiter::OrbitAnimator;
pub use pose::Pose;
pub use trail::{PulseMotion, PulseTrailAnimator, TRAIL_SEGMENTS};

/// Maps elapsed session time to a pose.
///
/// Implementations must be pure functions of `t`.
pub trait Animator: Send + Sync {
    fn pose(&self, t: f32) -> Pose;
}

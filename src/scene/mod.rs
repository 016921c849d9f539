//! Scene graph module
//!
//! The mount point the decorative entities live in:
//! - [`Scene`]: entity container and lifecycle (mount / unmount)
//! - [`Node`]: a mounted entity (transform + primitive)
//! - [`Transform`]: the transform handle written by the animation driver
//! - [`Primitive`]: sprite, line, mesh and light descriptions
//! - [`Light`]: ambient and point lights

pub mod light;
pub mod node;
pub mod primitive;
pub mod scene;
pub mod transform;

pub use light::{Light, LightKind, PointLight};
pub use node::Node;
pub use primitive::{Line, Mesh, Primitive, SphereGeometry, Sprite, SpriteMaterial};
pub use scene::{EntityState, Scene};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}

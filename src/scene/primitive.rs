//! Declarative descriptions of the visual primitives the scene can mount.

use glam::Vec3;

use crate::assets::TextureSlot;
use crate::scene::light::Light;

/// Material of a camera-facing sprite.
#[derive(Debug, Clone)]
pub struct SpriteMaterial {
    /// Tint multiplied into the texture (or the flat colour when untextured).
    pub color: Vec3,
    pub opacity: f32,
    pub transparent: bool,
    pub depth_write: bool,
    /// Texture fill. Anything but [`TextureSlot::Ready`] renders untextured.
    pub map: TextureSlot,
}

impl Default for SpriteMaterial {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            opacity: 1.0,
            transparent: true,
            depth_write: false,
            map: TextureSlot::Pending,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sprite {
    pub material: SpriteMaterial,
}

/// A polyline drawn through `points` in order.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<Vec3>,
    pub color: Vec3,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereGeometry {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for SphereGeometry {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 16,
            height_segments: 16,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: SphereGeometry,
    pub color: Vec3,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
}

/// Everything that can be mounted into a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone)]
pub enum Primitive {
    /// Pure transform node used to group other entities.
    Group,
    Sprite(Sprite),
    Line(Line),
    Mesh(Mesh),
    Light(Light),
}

impl Primitive {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Group => "group",
            Primitive::Sprite(_) => "sprite",
            Primitive::Line(_) => "line",
            Primitive::Mesh(_) => "mesh",
            Primitive::Light(_) => "light",
        }
    }

    #[must_use]
    pub fn as_sprite(&self) -> Option<&Sprite> {
        match self {
            Primitive::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sprite_mut(&mut self) -> Option<&mut Sprite> {
        match self {
            Primitive::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }
}

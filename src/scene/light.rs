use glam::Vec3;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// Cut-off distance; `0.0` means unlimited.
    pub distance: f32,
    pub decay: f32,
}

// Light component mounted into the scene
#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    Ambient,
    Point(PointLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Ambient,
        }
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, distance: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Point(PointLight {
                distance,
                decay: 2.0,
            }),
        }
    }
}

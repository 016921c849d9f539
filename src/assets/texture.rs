use uuid::Uuid;

use crate::errors::Result;

/// A decoded RGBA8 image ready to be used as a sprite fill.
#[derive(Debug, Clone)]
pub struct Texture {
    pub uuid: Uuid,
    pub label: String,
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, row-major.
    pub data: Vec<u8>,
}

impl Texture {
    /// Decodes an encoded image (PNG, JPEG, WebP).
    pub fn from_encoded(label: &str, bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            uuid: Uuid::new_v4(),
            label: label.to_owned(),
            width,
            height,
            data: rgba.into_raw(),
        })
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

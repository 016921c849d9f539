//! Texture slot
//!
//! A sprite's texture fill is resolved asynchronously. [`TextureSlot`] makes
//! the intermediate states explicit so the frame path checks for presence
//! instead of relying on null-tolerant rendering.

use crate::assets::server::TextureHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureSlot {
    /// Load requested, not resolved yet.
    #[default]
    Pending,
    /// Decoded and stored in the [`AssetServer`](crate::assets::AssetServer).
    Ready(TextureHandle),
    /// Load failed; the entity stays untextured for the rest of the session.
    Failed,
}

impl TextureSlot {
    /// The texture handle, if one is available to render with.
    #[inline]
    #[must_use]
    pub fn handle(self) -> Option<TextureHandle> {
        match self {
            TextureSlot::Ready(handle) => Some(handle),
            TextureSlot::Pending | TextureSlot::Failed => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, TextureSlot::Ready(_))
    }

    /// `true` once the slot can no longer change.
    #[inline]
    #[must_use]
    pub fn is_settled(self) -> bool {
        !matches!(self, TextureSlot::Pending)
    }
}

//! Asset module
//!
//! Asynchronous texture loading for sprite fills:
//! - [`AssetServer`]: loads and stores textures, hands out [`TextureRequest`]s
//! - [`TextureSlot`]: present/absent view of a texture the frame path checks
//! - [`AssetSource`]: file path or in-memory bytes
//! - [`AssetStorage`]: lock-guarded handle storage with URI deduplication

pub mod handle;
pub mod io;
pub mod server;
pub mod storage;
pub mod texture;

pub use handle::TextureSlot;
pub use io::AssetSource;
pub use server::{AssetServer, TextureHandle, TextureRequest};
pub use storage::AssetStorage;
pub use texture::Texture;

use slotmap::new_key_type;
use std::sync::Arc;

use crate::assets::handle::TextureSlot;
use crate::assets::io::AssetSource;
use crate::assets::storage::AssetStorage;
use crate::assets::texture::Texture;
use crate::errors::{Result, SceneError};

#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;
#[cfg(not(target_arch = "wasm32"))]
use tokio::runtime::Runtime;

#[cfg(not(target_arch = "wasm32"))]
fn get_asset_runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create asset loader runtime"))
}

new_key_type! {
    pub struct TextureHandle;
}

/// Resource-loading service.
///
/// Cheap to clone; clones share the same storage, so loader tasks can insert
/// while the frame loop reads.
#[derive(Clone, Default)]
pub struct AssetServer {
    pub textures: Arc<AssetStorage<TextureHandle, Texture>>,
}

impl AssetServer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads, decodes and stores a texture.
    ///
    /// Sources with a URI that was already loaded return the stored handle
    /// without reading again.
    pub async fn load_texture_async(&self, source: AssetSource) -> Result<TextureHandle> {
        let uri = source.uri();
        if let Some(handle) = self.textures.get_handle_by_uri(&uri) {
            return Ok(handle);
        }

        let bytes = source.read_bytes().await?;
        let texture = Texture::from_encoded(&uri, &bytes)?;
        log::info!(
            "Loaded texture '{uri}' ({}x{})",
            texture.width,
            texture.height
        );
        Ok(self.textures.add_with_uri(&uri, texture))
    }

    /// Starts loading a texture in the background.
    ///
    /// The returned request is polled from the frame loop and never blocks.
    #[must_use]
    pub fn request_texture(&self, source: AssetSource) -> TextureRequest {
        let (tx, rx) = flume::bounded(1);
        let uri = source.uri();
        let server = self.clone();

        #[cfg(not(target_arch = "wasm32"))]
        get_asset_runtime().spawn(async move {
            let result = server.load_texture_async(source).await;
            // The request may have been dropped (view unmounted); nothing to report.
            let _ = tx.send(result);
        });

        #[cfg(target_arch = "wasm32")]
        {
            let result = futures::executor::block_on(server.load_texture_async(source));
            let _ = tx.send(result);
        }

        TextureRequest {
            uri,
            rx,
            slot: TextureSlot::Pending,
        }
    }

    #[must_use]
    pub fn get_texture(&self, handle: TextureHandle) -> Option<Arc<Texture>> {
        self.textures.get(handle)
    }
}

/// An in-flight texture load.
pub struct TextureRequest {
    uri: String,
    rx: flume::Receiver<Result<TextureHandle>>,
    slot: TextureSlot,
}

impl TextureRequest {
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Current slot value without waiting.
    #[must_use]
    pub fn slot(&self) -> TextureSlot {
        self.slot
    }

    /// Checks for completion without blocking.
    pub fn poll(&mut self) -> TextureSlot {
        if self.slot.is_settled() {
            return self.slot;
        }
        match self.rx.try_recv() {
            Ok(result) => self.settle(result),
            Err(flume::TryRecvError::Empty) => {}
            Err(flume::TryRecvError::Disconnected) => {
                log::warn!("Texture loader for '{}' went away", self.uri);
                self.slot = TextureSlot::Failed;
            }
        }
        self.slot
    }

    /// Blocks until the load settles. Not for use inside a frame callback.
    pub fn wait(mut self) -> TextureSlot {
        if self.slot.is_settled() {
            return self.slot;
        }
        let result = self.rx.recv().map_err(SceneError::from).and_then(|r| r);
        self.settle(result);
        self.slot
    }

    fn settle(&mut self, result: Result<TextureHandle>) {
        self.slot = match result {
            Ok(handle) => TextureSlot::Ready(handle),
            Err(err) => {
                log::warn!("Texture '{}' failed to load, rendering untextured: {err}", self.uri);
                TextureSlot::Failed
            }
        };
    }
}

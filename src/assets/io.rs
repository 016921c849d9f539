use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::{Result, SceneError};

/// Where a texture's encoded bytes come from.
#[derive(Debug, Clone)]
pub enum AssetSource {
    /// A file on the local file system.
    Path(PathBuf),
    /// Bytes already in memory (embedded assets, tests).
    Bytes { label: String, data: Arc<[u8]> },
}

impl AssetSource {
    #[must_use]
    pub fn path(path: impl Into<PathBuf>) -> Self {
        AssetSource::Path(path.into())
    }

    #[must_use]
    pub fn bytes(label: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        AssetSource::Bytes {
            label: label.into(),
            data: data.into(),
        }
    }

    /// Identifier used for deduplication and logging.
    #[must_use]
    pub fn uri(&self) -> String {
        match self {
            AssetSource::Path(path) => path.to_string_lossy().into_owned(),
            AssetSource::Bytes { label, .. } => format!("memory://{label}"),
        }
    }

    /// Reads the raw bytes.
    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        match self {
            AssetSource::Bytes { data, .. } => Ok(data.to_vec()),
            #[cfg(not(target_arch = "wasm32"))]
            AssetSource::Path(path) => match tokio::fs::read(path).await {
                Ok(bytes) => Ok(bytes),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    Err(SceneError::AssetNotFound(path.display().to_string()))
                }
                Err(err) => Err(err.into()),
            },
            #[cfg(target_arch = "wasm32")]
            AssetSource::Path(path) => Err(SceneError::FeatureNotEnabled(format!(
                "file system access on wasm32 ({})",
                path.display()
            ))),
        }
    }
}

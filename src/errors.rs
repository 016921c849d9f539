//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`SceneError`] covers the failure modes that can reach
//! a caller:
//! - Asset reading and image decoding errors
//! - Background loader failures
//! - Configuration parsing and validation errors
//!
//! The per-frame path never returns these. A texture that fails to load is
//! recorded as [`TextureSlot::Failed`](crate::assets::TextureSlot::Failed) and
//! the sprite keeps rendering without a map.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hisl_scene::errors::Result;
//!
//! fn load_config(json: &str) -> Result<SceneConfig> {
//!     SceneConfig::from_json_str(json)
//! }
//! ```

use thiserror::Error;

/// The main error type for the scene crate.
#[derive(Error, Debug)]
pub enum SceneError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    /// The background loader dropped the request before it completed.
    #[error("Task join error: {0}")]
    TaskJoinError(String),

    /// Loading from this kind of source is not available on this target.
    #[error("Feature not enabled: {0}")]
    FeatureNotEnabled(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A configuration value is outside its allowed range.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Dotted path of the offending field
        name: String,
        /// What is wrong with it
        reason: String,
    },
}

impl SceneError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SceneError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Convenient conversion implementations
// ============================================================================

impl From<image::ImageError> for SceneError {
    fn from(err: image::ImageError) -> Self {
        SceneError::ImageDecodeError(err.to_string())
    }
}

impl From<flume::RecvError> for SceneError {
    fn from(err: flume::RecvError) -> Self {
        SceneError::TaskJoinError(err.to_string())
    }
}

/// Alias for `Result<T, SceneError>`.
pub type Result<T> = std::result::Result<T, SceneError>;

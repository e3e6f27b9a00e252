//! Error types for the renderer.
//!
//! Only recoverable failures live here: configuration validation, asset
//! loading and window setup. Programmer errors inside the pipeline (singular
//! matrices during unprojection) panic instead.

use std::fmt;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug)]
pub enum RenderError {
    /// A [`RenderConfig`](crate::config::RenderConfig) value is out of range.
    InvalidConfig(String),

    /// The OBJ loader rejected a mesh file.
    MeshLoad(tobj::LoadError),

    /// A mesh file loaded but has nothing the pipeline can draw.
    EmptyMesh(String),

    /// The image decoder rejected a texture file.
    TextureLoad(image::ImageError),

    /// A texture was built from a pixel buffer of the wrong length.
    InvalidTexture(String),

    /// Window or display backend failure.
    Window(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidConfig(msg) => write!(f, "Invalid render config: {}", msg),
            RenderError::MeshLoad(err) => write!(f, "Failed to load mesh: {}", err),
            RenderError::EmptyMesh(path) => write!(f, "Mesh has no triangles: {}", path),
            RenderError::TextureLoad(err) => write!(f, "Failed to load texture: {}", err),
            RenderError::InvalidTexture(msg) => write!(f, "Invalid texture: {}", msg),
            RenderError::Window(msg) => write!(f, "Window error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::MeshLoad(err) => Some(err),
            RenderError::TextureLoad(err) => Some(err),
            _ => None,
        }
    }
}

impl From<tobj::LoadError> for RenderError {
    fn from(err: tobj::LoadError) -> Self {
        RenderError::MeshLoad(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::TextureLoad(err)
    }
}

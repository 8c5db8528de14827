//! Error types for the cellar engine.

use thiserror::Error;

/// Top-level error type for the cellar engine.
#[derive(Debug, Error)]
pub enum CellarError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors during layout generation.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl LayoutError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        LayoutError::InvalidConfiguration { reason: reason.into() }
    }
}

/// Errors during rasterization.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("Invalid render scale {scale}")]
    InvalidScale { scale: f32 },

    #[error("Surface {width}x{height} exceeds the pixel buffer limit")]
    SurfaceTooLarge { width: u64, height: u64 },
}

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export format not supported: {format}")]
    UnsupportedFormat { format: String },

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {reason}")]
    Encode { reason: String },

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),
}

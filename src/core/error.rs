use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading, rewriting, or rendering palette files.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Filesystem operation on a palette file (or output image) failed.
    #[error("I/O error on `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON serialization or deserialization failed.
    #[error("palette JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette file must contain a JSON object at the top level")]
    NotAnObject,
    #[error("palette `{palette}` contains a color that cannot be rendered: `{color}`")]
    InvalidColor { palette: String, color: String },
    #[error("rendered buffer does not match the figure size {width}x{height}")]
    ImageBuffer { width: u32, height: u32 },
}

impl PaletteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> PaletteError {
        PaletteError::Io {
            path: path.into(),
            source,
        }
    }
}

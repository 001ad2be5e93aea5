//! Crate-level error types.

use std::fmt;

/// Errors produced by the galleria crate.
#[derive(Debug)]
pub enum GalleriaError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn the background scene loader thread.
    ThreadSpawn(std::io::Error),
    /// Scene manifest parsing failure.
    ManifestParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GalleriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn loader thread: {e}")
            }
            Self::ManifestParse(msg) => {
                write!(f, "scene manifest error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GalleriaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalleriaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

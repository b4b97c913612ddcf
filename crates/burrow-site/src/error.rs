//! Error types for configuration and static export
//!
//! Rendering itself cannot fail; these cover the filesystem and config edges
//! of the native export build.

use std::path::PathBuf;

/// Errors that can occur while configuring or exporting the site
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Config file could not be parsed
    #[error("invalid config: {0}")]
    Config(String),

    /// Filesystem operation failed
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory is empty or a filesystem root
    #[error("refusing to use output directory '{}'", .0.display())]
    InvalidOutDir(PathBuf),

    /// Base URL must start and end with '/'
    #[error("base url must start and end with '/': {0}")]
    InvalidBaseUrl(String),
}

impl SiteError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

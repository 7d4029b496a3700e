//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading local image assets.
///
/// These never terminate the session; the UI degrades them to inline
/// warnings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssetError {
    #[error("unsupported image format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

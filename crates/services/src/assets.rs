use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;

use crate::error::AssetError;

/// Fixed-name assets used by the landing and end pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedAsset {
    Intro,
    End,
}

impl FixedAsset {
    /// The expected file name in the images directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            FixedAsset::Intro => "intro.jpeg",
            FixedAsset::End => "end.jpeg",
        }
    }
}

/// Locate a fixed asset in `dir`, if present.
#[must_use]
pub fn find_fixed_asset(dir: &Path, asset: FixedAsset) -> Option<PathBuf> {
    let path = dir.join(asset.file_name());
    if path.is_file() {
        Some(path)
    } else {
        warn!(expected = %path.display(), "fixed asset not found");
        None
    }
}

/// A local image encoded for inline display in the webview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    mime: &'static str,
    data_uri: String,
}

impl LoadedImage {
    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// `data:<mime>;base64,...` form, usable directly as an `img` source.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

/// Read `path` and encode it as a `data:` URI.
///
/// The desktop webview cannot fetch arbitrary local paths, so images are
/// inlined. The file's bytes are not sniffed; the MIME type comes from
/// the extension alone.
///
/// # Errors
///
/// Returns `AssetError::UnsupportedFormat` when the extension is not an
/// accepted image format, and `AssetError::Io` when the file cannot be
/// read.
pub fn load_image(path: &Path) -> Result<LoadedImage, AssetError> {
    let mime = mime_for(path).ok_or_else(|| AssetError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let bytes = fs::read(path).map_err(|source| {
        warn!(path = %path.display(), %source, "image read failed");
        AssetError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let encoded = STANDARD.encode(bytes);
    Ok(LoadedImage {
        mime,
        data_uri: format!("data:{mime};base64,{encoded}"),
    })
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use horoscope_core::ZodiacSign;

/// Accepted image extensions, in fixed priority order.
///
/// The scan visits extensions in this order and a later extension
/// overwrites an earlier one on stem collision, so `leo.webp` beats
/// `leo.jpg`. Extensions are compared ASCII-case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Mapping from sign to a local image discovered on disk.
///
/// Rebuilt from scratch on every render; holds at most twelve entries.
/// Paths were real at scan time but are not re-validated before use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageIndex {
    entries: BTreeMap<ZodiacSign, PathBuf>,
}

impl ImageIndex {
    #[must_use]
    pub fn get(&self, sign: ZodiacSign) -> Option<&Path> {
        self.entries.get(&sign).map(PathBuf::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Signs with a local image, in wheel-independent (enum) order.
    pub fn signs(&self) -> impl Iterator<Item = ZodiacSign> + '_ {
        self.entries.keys().copied()
    }
}

/// Scan `dir` once and map each sign to its image file.
///
/// A nonexistent or unreadable directory yields an empty index, not an
/// error. A file participates when its stem, lowercased and
/// whitespace-trimmed, equals a sign name; everything else is ignored.
#[must_use]
pub fn resolve(dir: &Path) -> ImageIndex {
    let mut entries = BTreeMap::new();

    let Ok(listing) = fs::read_dir(dir) else {
        debug!(dir = %dir.display(), "images directory missing, resolving empty index");
        return ImageIndex::default();
    };

    let files: Vec<PathBuf> = listing
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    for wanted in IMAGE_EXTENSIONS {
        for path in &files {
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted));
            if !matches {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if let Ok(sign) = stem.parse::<ZodiacSign>() {
                entries.insert(sign, path.clone());
            }
        }
    }

    ImageIndex { entries }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

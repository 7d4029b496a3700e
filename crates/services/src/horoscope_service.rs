use std::path::{Path, PathBuf};

use url::Url;

use horoscope_core::{Clock, ZodiacSign};

use crate::reference::ReferenceTable;
use crate::{FixedAsset, ImageIndex, Sparkle, UiVariant, assets, image_index};

/// Everything the UI needs per render: the scan directory, the variant
/// configuration, a clock for the date header, and the sparkle source.
#[derive(Debug)]
pub struct HoroscopeService {
    images_dir: PathBuf,
    variant: UiVariant,
    clock: Clock,
    sparkle: Sparkle,
}

impl HoroscopeService {
    #[must_use]
    pub fn new(images_dir: impl Into<PathBuf>, variant: UiVariant, clock: Clock) -> Self {
        Self {
            images_dir: images_dir.into(),
            variant,
            clock,
            sparkle: Sparkle::new(),
        }
    }

    /// Replace the sparkle source; tests install a seeded one.
    #[must_use]
    pub fn with_sparkle(mut self, sparkle: Sparkle) -> Self {
        self.sparkle = sparkle;
        self
    }

    #[must_use]
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    #[must_use]
    pub fn variant(&self) -> UiVariant {
        self.variant
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Fresh scan of the images directory.
    ///
    /// Cheap and idempotent; runs in full on every render, so a file
    /// dropped into the directory shows up on the next action.
    #[must_use]
    pub fn image_index(&self) -> ImageIndex {
        image_index::resolve(&self.images_dir)
    }

    /// Path to `intro.jpeg` / `end.jpeg`, if present.
    #[must_use]
    pub fn fixed_asset(&self, asset: FixedAsset) -> Option<PathBuf> {
        assets::find_fixed_asset(&self.images_dir, asset)
    }

    /// Reference link for a sign under this variant's table.
    #[must_use]
    pub fn reference_url(&self, sign: ZodiacSign) -> Option<&'static Url> {
        ReferenceTable::for_variant(self.variant).url(sign)
    }

    /// One decorative roll per main-view render.
    #[must_use]
    pub fn sparkle_roll(&self) -> bool {
        self.sparkle.roll()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

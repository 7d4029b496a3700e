use std::path::Path;

use horoscope_core::ZodiacSign;
use services::{FixedAsset, Url, load_image};

/// Remote fallback shown when a sign has no usable local image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2e/Zodiac_Clock_-_detail.jpg/640px-Zodiac_Clock_-_detail.jpg";

/// Inline hint shown next to load-failure warnings.
pub const FORMAT_HINT: &str =
    "Make sure your image file is a supported format (JPG, PNG, WEBP)";

/// What the main view's content panel shows for the selected sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImagePanelVm {
    /// A local image, inlined as a data URI.
    Local { data_uri: String, caption: String },
    /// No local image, or it failed to load. The panel degrades to the
    /// remote placeholder; `warning` carries the failure text, if any.
    Placeholder { warning: Option<String> },
}

/// Map the resolver's answer for `sign` into panel content.
///
/// Both failure shapes (no entry, unreadable file) land on the
/// placeholder; nothing here is an error to the caller.
#[must_use]
pub fn map_image_panel(sign: ZodiacSign, local: Option<&Path>) -> ImagePanelVm {
    let Some(path) = local else {
        return ImagePanelVm::Placeholder { warning: None };
    };

    match load_image(path) {
        Ok(image) => ImagePanelVm::Local {
            data_uri: image.data_uri().to_string(),
            caption: format!(
                "\u{2728} The stars have spoken for {}... \u{2728}",
                sign.label()
            ),
        },
        Err(err) => ImagePanelVm::Placeholder {
            warning: Some(format!("Couldn't display image: {err}")),
        },
    }
}

/// Link block under the image panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLinkVm {
    pub href: String,
}

/// A sign without a reference-table entry simply has no link block.
#[must_use]
pub fn map_source_link(url: Option<&Url>) -> Option<SourceLinkVm> {
    url.map(|url| SourceLinkVm {
        href: url.to_string(),
    })
}

/// What the landing and end pages show for their fixed-name asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixedImageVm {
    Ready {
        data_uri: String,
        caption: &'static str,
    },
    Missing {
        warning: String,
        hint: Option<&'static str>,
    },
}

/// Map a fixed asset lookup into page content.
#[must_use]
pub fn map_fixed_image(asset: FixedAsset, path: Option<&Path>) -> FixedImageVm {
    let Some(path) = path else {
        return match asset {
            FixedAsset::Intro => FixedImageVm::Missing {
                warning: format!(
                    "Intro image '{}' not found in the folder. Please add it for the best experience.",
                    asset.file_name()
                ),
                hint: Some(
                    "The intro image should be named 'intro.jpeg' and placed in the same folder as your zodiac images.",
                ),
            },
            FixedAsset::End => FixedImageVm::Missing {
                warning: format!("End image '{}' not found in the folder.", asset.file_name()),
                hint: None,
            },
        };
    };

    match load_image(path) {
        Ok(image) => FixedImageVm::Ready {
            data_uri: image.data_uri().to_string(),
            caption: match asset {
                FixedAsset::Intro => "Welcome to your sustainable journey \u{1f331}",
                FixedAsset::End => "A special message for sustainable procurement \u{1f331}",
            },
        },
        Err(err) => FixedImageVm::Missing {
            warning: format!("Couldn't display image: {err}"),
            hint: Some(FORMAT_HINT),
        },
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

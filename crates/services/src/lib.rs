#![forbid(unsafe_code)]

pub mod assets;
pub mod error;
pub mod horoscope_service;
pub mod image_index;
pub mod reference;
pub mod sparkle;
pub mod variant;

pub use horoscope_core::Clock;
pub use url::Url;

pub use assets::{FixedAsset, LoadedImage, find_fixed_asset, load_image};
pub use error::AssetError;
pub use horoscope_service::HoroscopeService;
pub use image_index::{IMAGE_EXTENSIONS, ImageIndex, resolve};
pub use reference::ReferenceTable;
pub use sparkle::{SPARKLE_PROBABILITY, Sparkle};
pub use variant::{ParseVariantError, UiVariant};

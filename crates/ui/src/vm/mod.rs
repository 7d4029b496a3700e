mod panel_vm;
mod time_fmt;

pub use panel_vm::{
    FORMAT_HINT, FixedImageVm, ImagePanelVm, PLACEHOLDER_IMAGE_URL, SourceLinkVm, map_fixed_image,
    map_image_panel, map_source_link,
};
pub use time_fmt::format_today;

//! Application messages

use std::sync::Arc;

use image::RgbaImage;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Step back one marker
    Previous,
    /// Advance one marker
    Next,
    /// Switch between numeric and icon display
    ToggleMode,
    /// Icon rasters decoded at startup
    IconsLoaded(Vec<(String, Arc<RgbaImage>)>),
}

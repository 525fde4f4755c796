//! Helpers for configuring the step indicator from settings

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use image::RgbaImage;

use crate::features::StepperSettings;
use crate::ui::primitives::StepIndicator;

/// Build a step indicator from settings
///
/// An invalid point count is logged and the widget default is kept.
pub fn build_stepper(settings: &StepperSettings) -> StepIndicator {
    let mut stepper = StepIndicator::default();
    if let Err(e) = stepper.set_point_count(settings.point_count) {
        tracing::warn!("Invalid step count in settings: {}", e);
    }
    stepper.set_current_index(settings.current_index);
    stepper.set_display_mode(settings.display_mode);
    stepper.set_style(settings.style());
    for (&index, identifier) in &settings.icons {
        stepper.set_step_icon(index, identifier.as_str());
    }
    stepper
}

/// Icons compiled into the binary, keyed by identifier
const BUNDLED_ICONS: &[(&str, &[u8])] = &[
    ("step1", include_bytes!("../../assets/icons/step1.png")),
    ("step2", include_bytes!("../../assets/icons/step2.png")),
    ("step3", include_bytes!("../../assets/icons/step3.png")),
];

/// Decode one icon file into an RGBA raster
pub fn load_icon(path: &Path) -> anyhow::Result<RgbaImage> {
    let image =
        image::open(path).with_context(|| format!("Failed to open icon {}", path.display()))?;
    Ok(image.to_rgba8())
}

/// Decode a bundled icon, `None` if the identifier is not bundled
pub fn bundled_icon(identifier: &str) -> Option<anyhow::Result<RgbaImage>> {
    let (_, bytes) = BUNDLED_ICONS.iter().find(|(id, _)| *id == identifier)?;
    Some(
        image::load_from_memory(bytes)
            .map(|image| image.to_rgba8())
            .with_context(|| format!("Failed to decode bundled icon '{}'", identifier)),
    )
}

/// Resolve one identifier: the override directory first, then the bundle
fn resolve_icon(settings: &StepperSettings, identifier: &str) -> anyhow::Result<RgbaImage> {
    if let Some(path) = settings.icon_path(identifier) {
        match load_icon(&path) {
            Ok(raster) => {
                tracing::debug!("Loaded icon '{}' from {}", identifier, path.display());
                return Ok(raster);
            }
            Err(e) => tracing::debug!("No override for '{}': {:#}", identifier, e),
        }
    }
    bundled_icon(identifier)
        .with_context(|| format!("No icon file or bundled icon named '{}'", identifier))?
}

/// Resolve every configured icon; failures are logged and skipped
pub fn collect_icons(settings: &StepperSettings) -> Vec<(String, Arc<RgbaImage>)> {
    let mut loaded: Vec<(String, Arc<RgbaImage>)> = Vec::new();
    for identifier in settings.icons.values() {
        if loaded.iter().any(|(id, _)| id == identifier) {
            continue;
        }
        match resolve_icon(settings, identifier) {
            Ok(raster) => loaded.push((identifier.clone(), Arc::new(raster))),
            Err(e) => tracing::warn!("Skipping icon '{}': {:#}", identifier, e),
        }
    }
    tracing::info!("Loaded {} step icons", loaded.len());
    loaded
}

/// Startup task wrapper around [`collect_icons`]
pub async fn load_icons(settings: StepperSettings) -> Vec<(String, Arc<RgbaImage>)> {
    collect_icons(&settings)
}

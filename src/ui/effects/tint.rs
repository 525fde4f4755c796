//! Icon tinting
//!
//! Recolors an icon by filling a surface of the icon's size with the target
//! color and keeping that color only where the icon is opaque
//! (destination-in compositing). The icon's own RGB is discarded.

use iced::Color;
use image::{ImageBuffer, RgbaImage};

/// Errors raised when the tint surface cannot be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TintError {
    /// The source icon has no pixels
    EmptySurface { width: u32, height: u32 },
    /// The pixel buffer did not match the requested dimensions
    Surface { width: u32, height: u32 },
}

impl std::fmt::Display for TintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TintError::EmptySurface { width, height } => {
                write!(f, "cannot tint an empty {}x{} icon", width, height)
            }
            TintError::Surface { width, height } => {
                write!(f, "failed to allocate a {}x{} tint surface", width, height)
            }
        }
    }
}

impl std::error::Error for TintError {}

/// Tint `source` with `color`
///
/// The result has the source's pixel size. Each pixel carries the color's
/// RGB, and its alpha is the source alpha scaled by the color's alpha.
pub fn tint(source: &RgbaImage, color: Color) -> Result<RgbaImage, TintError> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(TintError::EmptySurface { width, height });
    }

    let [r, g, b, a] = color.into_rgba8();

    // Fill the surface with the target color
    let mut data: Vec<u8> = [r, g, b, a].repeat(source.as_raw().len() / 4);

    // Destination-in: keep the fill scaled by the source alpha
    for (dst, src) in data.chunks_exact_mut(4).zip(source.pixels()) {
        dst[3] = mul_alpha(a, src.0[3]);
    }

    ImageBuffer::from_raw(width, height, data).ok_or(TintError::Surface { width, height })
}

/// Tint and wrap the result in an iced image handle ready for drawing
pub fn tint_to_handle(
    source: &RgbaImage,
    color: Color,
) -> Result<iced::widget::image::Handle, TintError> {
    let tinted = tint(source, color)?;
    let (width, height) = tinted.dimensions();
    Ok(iced::widget::image::Handle::from_rgba(
        width,
        height,
        tinted.into_raw(),
    ))
}

/// 8-bit alpha product, rounded
fn mul_alpha(a: u8, b: u8) -> u8 {
    let product = a as u32 * b as u32 + 127;
    ((product + (product >> 8)) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_opaque_square_takes_tint_color() {
        let source = RgbaImage::from_pixel(8, 8, Rgba([10, 200, 30, 255]));
        let color = Color::from_rgb8(255, 128, 0);

        let tinted = tint(&source, color).unwrap();

        assert_eq!(tinted.dimensions(), (8, 8));
        for pixel in tinted.pixels() {
            assert_eq!(pixel.0, [255, 128, 0, 255]);
        }
    }

    #[test]
    fn test_alpha_mask_is_preserved() {
        let mut source = RgbaImage::new(4, 1);
        for (x, alpha) in [0u8, 64, 200, 255].into_iter().enumerate() {
            source.put_pixel(x as u32, 0, Rgba([0, 0, 0, alpha]));
        }

        let tinted = tint(&source, Color::from_rgb8(156, 145, 158)).unwrap();

        for (src, dst) in source.pixels().zip(tinted.pixels()) {
            assert_eq!(src.0[3], dst.0[3]);
            assert_eq!(&dst.0[..3], &[156, 145, 158]);
        }
    }

    #[test]
    fn test_translucent_color_scales_alpha() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let tinted = tint(&source, Color::from_rgba8(255, 255, 255, 0.5)).unwrap();

        let alpha = tinted.get_pixel(0, 0).0[3];
        assert!((127..=128).contains(&alpha));
    }

    #[test]
    fn test_empty_icon_is_an_error() {
        let source = RgbaImage::new(0, 5);
        assert_eq!(
            tint(&source, Color::WHITE),
            Err(TintError::EmptySurface {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn test_mul_alpha_bounds() {
        assert_eq!(mul_alpha(255, 255), 255);
        assert_eq!(mul_alpha(255, 0), 0);
        assert_eq!(mul_alpha(0, 255), 0);
        assert_eq!(mul_alpha(255, 77), 77);
    }
}

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use tracing::debug;

use crate::consts::MAX_IMAGE_DIMENSION;
use crate::draw::PixelRect;

use super::OverlayLayer;

/// Overlay size after scaling, rounded and at least 1x1.
pub fn scaled_overlay_size(source: (u32, u32), scale: f32) -> (u32, u32) {
    let w = (source.0 as f32 * scale).round() as u32;
    let h = (source.1 as f32 * scale).round() as u32;
    (w.max(1), h.max(1))
}

/// Top-left and size of an overlay centred in `base` and shifted by `offset`.
pub fn overlay_placement(base: (u32, u32), overlay: (u32, u32), offset: (i32, i32)) -> PixelRect {
    let x = (base.0 as i64 - overlay.0 as i64).div_euclid(2) + offset.0 as i64;
    let y = (base.1 as i64 - overlay.1 as i64).div_euclid(2) + offset.1 as i64;
    PixelRect::new(x, y, overlay.0 as i64, overlay.1 as i64)
}

/// Bicubic resize of the overlay source; borrows it when the size is unchanged.
///
/// Returns `None` when either scaled side exceeds [`MAX_IMAGE_DIMENSION`];
/// such an overlay is never materialised in full.
pub fn resize_overlay(source: &RgbImage, scale: f32) -> Option<Cow<'_, RgbImage>> {
    let (w, h) = scaled_overlay_size(source.dimensions(), scale);
    if w > MAX_IMAGE_DIMENSION || h > MAX_IMAGE_DIMENSION {
        return None;
    }
    if (w, h) == source.dimensions() {
        Some(Cow::Borrowed(source))
    } else {
        Some(Cow::Owned(imageops::resize(source, w, h, FilterType::CatmullRom)))
    }
}

#[inline]
fn blend_pixel(dst: &mut Rgb<u8>, src: &Rgb<u8>, alpha: u32) {
    for c in 0..3 {
        dst.0[c] = mix(src.0[c], dst.0[c], alpha);
    }
}

#[inline]
fn mix(over: u8, under: u8, alpha: u32) -> u8 {
    ((over as u32 * alpha + under as u32 * (255 - alpha) + 127) / 255) as u8
}

/// Alpha-blend the scaled overlay onto `target` with its uniform opacity.
///
/// Returns the full (unclipped) footprint of the overlay in `target`
/// coordinates; only the part inside `target` is drawn. Overlays too large to
/// resample in full are sampled nearest-neighbour over the visible part only.
pub fn blend_overlay(target: &mut RgbImage, layer: &OverlayLayer<'_>) -> PixelRect {
    let scaled_size = scaled_overlay_size(layer.image.dimensions(), layer.scale);
    let footprint = overlay_placement(target.dimensions(), scaled_size, layer.offset);

    if layer.opacity == 0 {
        return footprint;
    }
    let Some(visible) = footprint.intersect(&PixelRect::of_image(target)) else {
        return footprint;
    };

    let alpha = layer.opacity as u32;

    match resize_overlay(layer.image, layer.scale) {
        Some(scaled) => {
            for y in visible.y..visible.bottom() {
                for x in visible.x..visible.right() {
                    let src = scaled.get_pixel((x - footprint.x) as u32, (y - footprint.y) as u32);
                    blend_pixel(target.get_pixel_mut(x as u32, y as u32), src, alpha);
                }
            }
        }
        None => {
            debug!(?footprint, "overlay exceeds resample limit, sampling visible part");
            let (sw, sh) = layer.image.dimensions();
            for y in visible.y..visible.bottom() {
                let sy = source_index(y - footprint.y, footprint.height, sh);
                for x in visible.x..visible.right() {
                    let sx = source_index(x - footprint.x, footprint.width, sw);
                    let src = layer.image.get_pixel(sx, sy);
                    blend_pixel(target.get_pixel_mut(x as u32, y as u32), src, alpha);
                }
            }
        }
    }

    footprint
}

/// Source pixel under position `pos` of a `scaled_len` span stretched from
/// `source_len` pixels.
fn source_index(pos: i64, scaled_len: i64, source_len: u32) -> u32 {
    let i = (pos as f64 * source_len as f64 / scaled_len.max(1) as f64) as u32;
    i.min(source_len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_extremes() {
        assert_eq!(mix(200, 10, 255), 200);
        assert_eq!(mix(200, 10, 0), 10);
    }

    #[test]
    fn test_mix_half() {
        // (200*128 + 0*127 + 127) / 255 = 100.89 -> 100
        assert_eq!(mix(200, 0, 128), 100);
    }

    #[test]
    fn test_source_index_stretch() {
        assert_eq!(source_index(0, 1_000_000, 10), 0);
        assert_eq!(source_index(999_999, 1_000_000, 10), 9);
        assert_eq!(source_index(150_000, 1_000_000, 10), 1);
    }

    #[test]
    fn test_resize_refuses_oversized() {
        let src = RgbImage::new(100, 100);
        assert!(resize_overlay(&src, 1.0e7).is_none());
        assert!(resize_overlay(&src, 1.0).is_some());
    }

    #[test]
    fn test_scaled_size_floor() {
        assert_eq!(scaled_overlay_size((5, 5), 0.1), (1, 1));
        assert_eq!(scaled_overlay_size((100, 40), 0.5), (50, 20));
    }
}

use image::{imageops, Rgb, RgbImage};
use tracing::warn;

use crate::consts::MAX_IMAGE_DIMENSION;

/// Size of the canvas a base of `base_size` shifted by `offset` is drawn on:
/// grown by `2*|offset|` per axis.
///
/// `None` when a side would exceed [`MAX_IMAGE_DIMENSION`] (or the base's own
/// side, if that is larger).
pub fn shifted_canvas_size(base_size: (u32, u32), offset: (i32, i32)) -> Option<(u32, u32)> {
    let grow = |side: u32, d: i32| {
        let grown = side as i64 + 2 * (d as i64).abs();
        let limit = side.max(MAX_IMAGE_DIMENSION) as i64;
        u32::try_from(grown).ok().filter(|_| grown <= limit)
    };
    Some((grow(base_size.0, offset.0)?, grow(base_size.1, offset.1)?))
}

/// Shift `base` by `offset` on a canvas grown by `2*|offset|` per axis and
/// filled with `background`.
///
/// A zero offset returns an unchanged copy. The shifted base always lands
/// inside the grown canvas. When [`shifted_canvas_size`] refuses the canvas,
/// the unshifted copy is returned instead.
pub fn shift_base(base: &RgbImage, offset: (i32, i32), background: Rgb<u8>) -> RgbImage {
    if offset == (0, 0) {
        return base.clone();
    }

    let Some((cw, ch)) = shifted_canvas_size(base.dimensions(), offset) else {
        warn!(?offset, "shifted canvas too large, keeping base unshifted");
        return base.clone();
    };

    let mut canvas = RgbImage::from_pixel(cw, ch, background);
    let x = (cw - base.width()) as i64 / 2 + offset.0 as i64;
    let y = (ch - base.height()) as i64 / 2 + offset.1 as i64;
    imageops::replace(&mut canvas, base, x, y);
    canvas
}

pub mod base;
pub mod overlay;

use image::{Rgb, RgbImage};
use tracing::debug;

use crate::config::ViewerConfig;
use crate::consts::{DEFAULT_BACKGROUND, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH};
use crate::draw::{draw_rect_outline, PixelRect};

pub use base::{shift_base, shifted_canvas_size};
pub use overlay::{blend_overlay, overlay_placement, resize_overlay, scaled_overlay_size};

/// An overlay source together with its placement for one composite.
#[derive(Clone, Copy, Debug)]
pub struct OverlayLayer<'a> {
    /// Unscaled overlay pixels.
    pub image: &'a RgbImage,
    pub scale: f32,
    /// Shift from the centred position, in output pixels.
    pub offset: (i32, i32),
    pub opacity: u8,
}

/// Colours and decorations used while compositing.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeStyle {
    pub background: Rgb<u8>,
    pub border_color: Rgb<u8>,
    pub border_width: u32,
    /// Outline the overlay footprint (edit-overlay mode).
    pub highlight_overlay: bool,
}

impl Default for CompositeStyle {
    fn default() -> Self {
        Self {
            background: Rgb(DEFAULT_BACKGROUND),
            border_color: Rgb(DEFAULT_BORDER_COLOR),
            border_width: DEFAULT_BORDER_WIDTH,
            highlight_overlay: false,
        }
    }
}

impl CompositeStyle {
    pub fn from_config(config: &ViewerConfig, highlight_overlay: bool) -> Self {
        Self {
            background: Rgb(config.view.background),
            border_color: Rgb(config.overlay.border_color),
            border_width: config.overlay.border_width,
            highlight_overlay,
        }
    }
}

/// Composite the (optionally shifted) base and an optional overlay into one
/// opaque RGB image.
///
/// A nonzero `base_offset` grows the output by twice the offset on each axis,
/// so callers must read the size off the result. Overlays placed partly or
/// fully off-canvas are clipped; this never fails.
pub fn composite(
    base: &RgbImage,
    base_offset: (i32, i32),
    overlay: Option<&OverlayLayer<'_>>,
    style: &CompositeStyle,
) -> RgbImage {
    let mut out = shift_base(base, base_offset, style.background);

    let Some(layer) = overlay else {
        return out;
    };

    let footprint = blend_overlay(&mut out, layer);

    if style.highlight_overlay {
        match footprint.intersect(&PixelRect::of_image(&out)) {
            Some(visible) => {
                draw_rect_outline(&mut out, &visible, style.border_width, style.border_color);
            }
            None => debug!(?footprint, "overlay off-canvas, no highlight drawn"),
        }
    }

    out
}

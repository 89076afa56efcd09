//! Canvas <-> image coordinate mapping and pointer interpretation.
//!
//! The canvas is the widget area the rendered image is shown in. A rendered
//! image of `image_size * zoom` pixels sits at [`centering_offset`] inside it.

use crate::compose::{overlay_placement, scaled_overlay_size, shifted_canvas_size};
use crate::state::EditMode;

pub type Point = (f32, f32);
pub type Size = (f32, f32);

/// Top-left of a `display`-sized image centred in `canvas`, clamped to >= 0
/// so oversized images start at the canvas origin.
pub fn centering_offset(canvas: Size, display: Size) -> Point {
    (
        ((canvas.0 - display.0) / 2.0).max(0.0),
        ((canvas.1 - display.1) / 2.0).max(0.0),
    )
}

fn usable_zoom(zoom: f32) -> f32 {
    if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        1.0
    }
}

/// Canvas point to image-space point, clamped to `[0, image_size]` per axis.
pub fn canvas_to_image(pt: Point, zoom: f32, canvas: Size, image_size: Size) -> Point {
    let zoom = usable_zoom(zoom);
    let off = centering_offset(canvas, (image_size.0 * zoom, image_size.1 * zoom));
    (
        ((pt.0 - off.0) / zoom).clamp(0.0, image_size.0.max(0.0)),
        ((pt.1 - off.1) / zoom).clamp(0.0, image_size.1.max(0.0)),
    )
}

/// Image-space point to canvas point. Not clamped.
pub fn image_to_canvas(pt: Point, zoom: f32, canvas: Size, image_size: Size) -> Point {
    let zoom = usable_zoom(zoom);
    let off = centering_offset(canvas, (image_size.0 * zoom, image_size.1 * zoom));
    (off.0 + pt.0 * zoom, off.1 + pt.1 * zoom)
}

/// Rectangle in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub min: Point,
    pub max: Point,
}

impl CanvasRect {
    pub fn contains(&self, pt: Point) -> bool {
        pt.0 >= self.min.0 && pt.0 <= self.max.0 && pt.1 >= self.min.1 && pt.1 <= self.max.1
    }

    pub fn width(&self) -> f32 {
        self.max.0 - self.min.0
    }

    pub fn height(&self) -> f32 {
        self.max.1 - self.min.1
    }
}

/// Size and placement of the overlay, in image space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayGeometry {
    pub source_size: (u32, u32),
    pub scale: f32,
    pub offset: (i32, i32),
}

/// Size of the composite for a base shifted by `base_offset`. Matches
/// [`shift_base`](crate::compose::shift_base), including its fallback to the
/// unshifted base.
pub fn composite_size(base_size: (u32, u32), base_offset: (i32, i32)) -> (u32, u32) {
    shifted_canvas_size(base_size, base_offset).unwrap_or(base_size)
}

/// Pixel size of an image of `size` drawn at `zoom`: truncated, at least 1x1.
pub fn zoomed_dimensions(size: (u32, u32), zoom: f32) -> (u32, u32) {
    let zoom = usable_zoom(zoom);
    (
        ((size.0 as f32 * zoom) as u32).max(1),
        ((size.1 as f32 * zoom) as u32).max(1),
    )
}

/// An image-space offset in rendered pixels at `zoom`, rounded.
pub fn scale_offset(offset: (i32, i32), zoom: f32) -> (i32, i32) {
    let zoom = usable_zoom(zoom);
    (
        (offset.0 as f32 * zoom).round() as i32,
        (offset.1 as f32 * zoom).round() as i32,
    )
}

/// Canvas-space bounding box of the overlay.
///
/// Placement is computed on the zoomed composite with the zoomed overlay
/// size, the same way the renderer draws it, so hit-testing and the drawn
/// footprint agree to the pixel.
pub fn overlay_canvas_bounds(
    overlay: &OverlayGeometry,
    base_size: (u32, u32),
    base_offset: (i32, i32),
    zoom: f32,
    canvas: Size,
) -> CanvasRect {
    let comp = composite_size(
        zoomed_dimensions(base_size, zoom),
        scale_offset(base_offset, zoom),
    );
    let scaled = scaled_overlay_size(overlay.source_size, overlay.scale * usable_zoom(zoom));
    let placed = overlay_placement(comp, scaled, scale_offset(overlay.offset, zoom));

    let origin = centering_offset(canvas, (comp.0 as f32, comp.1 as f32));
    let min = (origin.0 + placed.x as f32, origin.1 + placed.y as f32);
    CanvasRect {
        min,
        max: (min.0 + placed.width as f32, min.1 + placed.height as f32),
    }
}

/// What a drag starting at a given point manipulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    Overlay,
    Base,
    Grid,
    Pan,
}

/// Decide the drag target. Rules are checked in order and exactly one fires:
/// overlay hit in edit-overlay mode, move-base mode, move-grid mode, pan.
pub fn classify_target(
    pt: Point,
    edit_mode: EditMode,
    overlay_bounds: Option<&CanvasRect>,
) -> DragTarget {
    if edit_mode == EditMode::EditOverlay && overlay_bounds.is_some_and(|b| b.contains(pt)) {
        DragTarget::Overlay
    } else if edit_mode == EditMode::MoveBase {
        DragTarget::Base
    } else if edit_mode == EditMode::MoveGrid {
        DragTarget::Grid
    } else {
        DragTarget::Pan
    }
}

/// Movement produced by one pointer-move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragDelta {
    /// Whole image pixels to add to the target's offset.
    Edit { target: DragTarget, dx: i32, dy: i32 },
    /// Raw canvas delta for the scrolling collaborator.
    Pan { dx: f32, dy: f32 },
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    target: DragTarget,
    last: Point,
    residual: (f32, f32),
}

/// Turns a press/move/release sequence into per-event deltas.
///
/// Every move reports movement since the previous event, not since the press.
/// Image-space deltas keep their fractional remainder for the next event.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    active: Option<ActiveDrag>,
}

impl DragTracker {
    pub fn press(&mut self, pt: Point, target: DragTarget) {
        self.active = Some(ActiveDrag {
            target,
            last: pt,
            residual: (0.0, 0.0),
        });
    }

    pub fn motion(&mut self, pt: Point, zoom: f32) -> Option<DragDelta> {
        let drag = self.active.as_mut()?;
        let delta = (pt.0 - drag.last.0, pt.1 - drag.last.1);
        drag.last = pt;

        if drag.target == DragTarget::Pan {
            return Some(DragDelta::Pan {
                dx: delta.0,
                dy: delta.1,
            });
        }

        let zoom = usable_zoom(zoom);
        drag.residual.0 += delta.0 / zoom;
        drag.residual.1 += delta.1 / zoom;
        let whole = (drag.residual.0.trunc(), drag.residual.1.trunc());
        drag.residual.0 -= whole.0;
        drag.residual.1 -= whole.1;

        Some(DragDelta::Edit {
            target: drag.target,
            dx: whole.0 as i32,
            dy: whole.1 as i32,
        })
    }

    /// End the drag, returning what it was moving.
    pub fn release(&mut self) -> Option<DragTarget> {
        self.active.take().map(|d| d.target)
    }

    pub fn target(&self) -> Option<DragTarget> {
        self.active.map(|d| d.target)
    }
}

/// New pan offset that keeps the point under the cursor fixed across a zoom
/// change. `pointer` is measured from the current image anchor. A zero or
/// invalid `old_zoom` leaves the pan untouched.
pub fn zoom_anchor_pan(pan: Point, pointer: Point, old_zoom: f32, new_zoom: f32) -> Point {
    if !(old_zoom.is_finite() && old_zoom > 0.0 && new_zoom.is_finite()) {
        return pan;
    }
    let scale_change = new_zoom / old_zoom;
    (
        pan.0 + pointer.0 * (1.0 - scale_change),
        pan.1 + pointer.1 * (1.0 - scale_change),
    )
}

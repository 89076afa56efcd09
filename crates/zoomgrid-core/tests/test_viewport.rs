use approx::assert_relative_eq;

use zoomgrid_core::state::EditMode;
use zoomgrid_core::viewport::{
    canvas_to_image, centering_offset, classify_target, composite_size, image_to_canvas,
    overlay_canvas_bounds, scale_offset, zoom_anchor_pan, zoomed_dimensions, CanvasRect,
    DragDelta, DragTarget, DragTracker, OverlayGeometry,
};

fn overlay_50() -> OverlayGeometry {
    OverlayGeometry {
        source_size: (50, 50),
        scale: 1.0,
        offset: (0, 0),
    }
}

// ---------------------------------------------------------------------------
// Coordinate mapping
// ---------------------------------------------------------------------------

#[test]
fn test_centering_offset() {
    assert_eq!(centering_offset((800.0, 600.0), (200.0, 100.0)), (300.0, 250.0));
}

#[test]
fn test_centering_offset_clamped() {
    assert_eq!(centering_offset((100.0, 600.0), (300.0, 100.0)), (0.0, 250.0));
}

#[test]
fn test_canvas_to_image_zoom_one() {
    let canvas = (800.0, 600.0);
    let image = (200.0, 100.0);
    assert_eq!(canvas_to_image((300.0, 250.0), 1.0, canvas, image), (0.0, 0.0));
    assert_eq!(canvas_to_image((400.0, 300.0), 1.0, canvas, image), (100.0, 50.0));
}

#[test]
fn test_canvas_to_image_zoomed() {
    // 400x200 display centred at (200, 200)
    let p = canvas_to_image((400.0, 300.0), 2.0, (800.0, 600.0), (200.0, 100.0));
    assert_relative_eq!(p.0, 100.0);
    assert_relative_eq!(p.1, 50.0);
}

#[test]
fn test_canvas_to_image_clamps() {
    let canvas = (800.0, 600.0);
    let image = (200.0, 100.0);
    assert_eq!(canvas_to_image((0.0, 0.0), 1.0, canvas, image), (0.0, 0.0));
    assert_eq!(canvas_to_image((1000.0, 1000.0), 1.0, canvas, image), (200.0, 100.0));
}

#[test]
fn test_image_to_canvas_inverts() {
    let canvas = (640.0, 480.0);
    let image = (300.0, 200.0);
    let zoom = 1.5;
    let pt = (123.0, 77.0);
    let there = image_to_canvas(pt, zoom, canvas, image);
    let back = canvas_to_image(there, zoom, canvas, image);
    assert_relative_eq!(back.0, pt.0, epsilon = 1e-3);
    assert_relative_eq!(back.1, pt.1, epsilon = 1e-3);
}

#[test]
fn test_composite_size() {
    assert_eq!(composite_size((200, 100), (10, -3)), (220, 106));
    assert_eq!(composite_size((200, 100), (0, 0)), (200, 100));
    assert_eq!(composite_size((200, 100), (i32::MAX, 0)), (200, 100));
    assert_eq!(composite_size((200, 100), (40_000, 40_000)), (200, 100));
}

#[test]
fn test_zoomed_dimensions_truncate() {
    assert_eq!(zoomed_dimensions((101, 51), 0.5), (50, 25));
    assert_eq!(zoomed_dimensions((1, 1), 0.5), (1, 1));
    assert_eq!(zoomed_dimensions((201, 101), 1.5), (301, 151));
}

#[test]
fn test_scale_offset_rounds() {
    assert_eq!(scale_offset((3, -3), 1.5), (5, -5));
    assert_eq!(scale_offset((4, 0), 2.0), (8, 0));
}

// ---------------------------------------------------------------------------
// Overlay bounds
// ---------------------------------------------------------------------------

#[test]
fn test_overlay_bounds_zoom_one() {
    let b = overlay_canvas_bounds(&overlay_50(), (200, 100), (0, 0), 1.0, (200.0, 100.0));
    assert_eq!(b.min, (75.0, 25.0));
    assert_eq!(b.max, (125.0, 75.0));
}

#[test]
fn test_overlay_bounds_zoomed() {
    let b = overlay_canvas_bounds(&overlay_50(), (200, 100), (0, 0), 2.0, (400.0, 200.0));
    assert_eq!(b.min, (150.0, 50.0));
    assert_eq!(b.max, (250.0, 150.0));
    assert_eq!(b.width(), 100.0);
}

#[test]
fn test_overlay_bounds_with_base_offset() {
    let b = overlay_canvas_bounds(&overlay_50(), (200, 100), (10, 0), 1.0, (220.0, 100.0));
    assert_eq!(b.min, (85.0, 25.0));
}

#[test]
fn test_overlay_bounds_with_scale_and_offset() {
    let geom = OverlayGeometry {
        source_size: (100, 40),
        scale: 0.5,
        offset: (-20, 5),
    };
    let b = overlay_canvas_bounds(&geom, (200, 100), (0, 0), 1.0, (200.0, 100.0));
    // 50x20 centred at (75, 40), shifted by (-20, 5)
    assert_eq!(b.min, (55.0, 45.0));
    assert_eq!(b.max, (105.0, 65.0));
}

// ---------------------------------------------------------------------------
// Target classification
// ---------------------------------------------------------------------------

#[test]
fn test_classify_priority() {
    let bounds = CanvasRect {
        min: (10.0, 10.0),
        max: (50.0, 50.0),
    };
    let inside = (20.0, 20.0);
    let outside = (80.0, 80.0);

    assert_eq!(
        classify_target(inside, EditMode::EditOverlay, Some(&bounds)),
        DragTarget::Overlay
    );
    assert_eq!(
        classify_target(outside, EditMode::EditOverlay, Some(&bounds)),
        DragTarget::Pan
    );
    assert_eq!(
        classify_target(inside, EditMode::EditOverlay, None),
        DragTarget::Pan
    );
    assert_eq!(
        classify_target(inside, EditMode::MoveBase, Some(&bounds)),
        DragTarget::Base
    );
    assert_eq!(
        classify_target(inside, EditMode::MoveGrid, Some(&bounds)),
        DragTarget::Grid
    );
    assert_eq!(
        classify_target(inside, EditMode::None, Some(&bounds)),
        DragTarget::Pan
    );
}

// ---------------------------------------------------------------------------
// Drag tracking
// ---------------------------------------------------------------------------

#[test]
fn test_drag_deltas_are_incremental() {
    let mut drag = DragTracker::default();
    drag.press((0.0, 0.0), DragTarget::Base);

    assert_eq!(
        drag.motion((10.0, 4.0), 2.0),
        Some(DragDelta::Edit {
            target: DragTarget::Base,
            dx: 5,
            dy: 2
        })
    );
    // Relative to the previous event, not the press point.
    assert_eq!(
        drag.motion((14.0, 4.0), 2.0),
        Some(DragDelta::Edit {
            target: DragTarget::Base,
            dx: 2,
            dy: 0
        })
    );
}

#[test]
fn test_drag_carries_subpixel_remainder() {
    let mut drag = DragTracker::default();
    drag.press((0.0, 0.0), DragTarget::Grid);
    assert_eq!(
        drag.motion((1.0, 0.0), 2.0),
        Some(DragDelta::Edit {
            target: DragTarget::Grid,
            dx: 0,
            dy: 0
        })
    );
    assert_eq!(
        drag.motion((2.0, 0.0), 2.0),
        Some(DragDelta::Edit {
            target: DragTarget::Grid,
            dx: 1,
            dy: 0
        })
    );
}

#[test]
fn test_drag_pan_is_verbatim() {
    let mut drag = DragTracker::default();
    drag.press((5.0, 5.0), DragTarget::Pan);
    assert_eq!(
        drag.motion((8.0, 1.0), 3.0),
        Some(DragDelta::Pan { dx: 3.0, dy: -4.0 })
    );
}

#[test]
fn test_drag_release() {
    let mut drag = DragTracker::default();
    assert_eq!(drag.motion((1.0, 1.0), 1.0), None);
    drag.press((0.0, 0.0), DragTarget::Overlay);
    assert_eq!(drag.target(), Some(DragTarget::Overlay));
    assert_eq!(drag.release(), Some(DragTarget::Overlay));
    assert_eq!(drag.motion((1.0, 1.0), 1.0), None);
    assert_eq!(drag.release(), None);
}

// ---------------------------------------------------------------------------
// Zoom anchoring
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_anchor_pan() {
    let pan = zoom_anchor_pan((0.0, 0.0), (100.0, -50.0), 1.0, 2.0);
    assert_relative_eq!(pan.0, -100.0);
    assert_relative_eq!(pan.1, 50.0);
}

#[test]
fn test_zoom_anchor_pan_guards_zero_zoom() {
    assert_eq!(zoom_anchor_pan((7.0, 3.0), (100.0, 100.0), 0.0, 2.0), (7.0, 3.0));
    assert_eq!(
        zoom_anchor_pan((7.0, 3.0), (100.0, 100.0), f32::NAN, 2.0),
        (7.0, 3.0)
    );
}

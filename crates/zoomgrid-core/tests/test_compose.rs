use image::{Rgb, RgbImage};

use zoomgrid_core::compose::{
    composite, overlay_placement, resize_overlay, shift_base, CompositeStyle, OverlayLayer,
};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn gradient(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([(x * 255 / w.max(1)) as u8, (y * 255 / h.max(1)) as u8, 77])
    })
}

fn layer(image: &RgbImage, scale: f32, offset: (i32, i32), opacity: u8) -> OverlayLayer<'_> {
    OverlayLayer {
        image,
        scale,
        offset,
        opacity,
    }
}

// ---------------------------------------------------------------------------
// Base layer
// ---------------------------------------------------------------------------

#[test]
fn test_identity_composite() {
    let base = gradient(8, 6);
    let out = composite(&base, (0, 0), None, &CompositeStyle::default());
    assert_eq!(out, base);
}

#[test]
fn test_base_offset_grows_canvas() {
    let base = gradient(10, 5);
    let out = shift_base(&base, (3, -2), WHITE);
    assert_eq!(out.dimensions(), (16, 9));
    // (16-10)/2 + 3 = 6, (9-5)/2 - 2 = 0
    assert_eq!(out.get_pixel(6, 0), base.get_pixel(0, 0));
    assert_eq!(out.get_pixel(15, 4), base.get_pixel(9, 4));
    assert_eq!(*out.get_pixel(0, 0), WHITE);
    assert_eq!(*out.get_pixel(5, 8), WHITE);
}

#[test]
fn test_base_offset_uses_background() {
    let base = RgbImage::from_pixel(4, 4, RED);
    let style = CompositeStyle {
        background: Rgb([10, 20, 30]),
        ..CompositeStyle::default()
    };
    let out = composite(&base, (-2, 0), None, &style);
    assert_eq!(out.dimensions(), (8, 4));
    assert_eq!(*out.get_pixel(0, 0), RED);
    assert_eq!(*out.get_pixel(7, 0), Rgb([10, 20, 30]));
}

// ---------------------------------------------------------------------------
// Overlay placement and blending
// ---------------------------------------------------------------------------

#[test]
fn test_overlay_centered_placement() {
    let rect = overlay_placement((200, 100), (50, 50), (0, 0));
    assert_eq!((rect.x, rect.y), (75, 25));
}

#[test]
fn test_overlay_centered_composite() {
    let base = RgbImage::from_pixel(200, 100, WHITE);
    let over = RgbImage::from_pixel(50, 50, RED);
    let out = composite(
        &base,
        (0, 0),
        Some(&layer(&over, 1.0, (0, 0), 255)),
        &CompositeStyle::default(),
    );
    assert_eq!(out.dimensions(), (200, 100));
    assert_eq!(*out.get_pixel(75, 25), RED);
    assert_eq!(*out.get_pixel(124, 74), RED);
    assert_eq!(*out.get_pixel(74, 25), WHITE);
    assert_eq!(*out.get_pixel(125, 74), WHITE);
    assert_eq!(*out.get_pixel(75, 24), WHITE);
}

#[test]
fn test_zero_opacity_matches_no_overlay() {
    let base = gradient(40, 30);
    let over = RgbImage::from_pixel(20, 20, RED);
    let style = CompositeStyle::default();
    let without = composite(&base, (5, 2), None, &style);
    let with = composite(&base, (5, 2), Some(&layer(&over, 1.3, (4, -3), 0)), &style);
    assert_eq!(with, without);
}

#[test]
fn test_full_opacity_shows_resized_overlay() {
    let base = RgbImage::from_pixel(60, 60, WHITE);
    let over = gradient(40, 20);
    let out = composite(
        &base,
        (0, 0),
        Some(&layer(&over, 0.5, (0, 0), 255)),
        &CompositeStyle::default(),
    );

    let resized = resize_overlay(&over, 0.5).unwrap();
    assert_eq!(resized.dimensions(), (20, 10));
    let rect = overlay_placement((60, 60), (20, 10), (0, 0));
    for y in 0..10 {
        for x in 0..20 {
            assert_eq!(
                out.get_pixel(rect.x as u32 + x, rect.y as u32 + y),
                resized.get_pixel(x, y),
                "mismatch at ({x},{y})"
            );
        }
    }
}

#[test]
fn test_half_opacity_blends() {
    let base = RgbImage::from_pixel(10, 10, WHITE);
    let over = RgbImage::from_pixel(10, 10, BLACK);
    let out = composite(
        &base,
        (0, 0),
        Some(&layer(&over, 1.0, (0, 0), 128)),
        &CompositeStyle::default(),
    );
    // (0*128 + 255*127 + 127) / 255 = 127
    assert_eq!(*out.get_pixel(5, 5), Rgb([127, 127, 127]));
}

#[test]
fn test_overlay_source_alpha_ignored() {
    // Sources are RGB by the time they reach the compositor; opacity alone decides.
    let base = RgbImage::from_pixel(4, 4, WHITE);
    let over = RgbImage::from_pixel(4, 4, RED);
    let out = composite(
        &base,
        (0, 0),
        Some(&layer(&over, 1.0, (0, 0), 255)),
        &CompositeStyle::default(),
    );
    assert!(out.pixels().all(|p| *p == RED));
}

#[test]
fn test_overlay_partially_off_canvas() {
    let base = RgbImage::from_pixel(200, 100, WHITE);
    let over = RgbImage::from_pixel(50, 50, RED);
    let out = composite(
        &base,
        (0, 0),
        Some(&layer(&over, 1.0, (-100, 0), 255)),
        &CompositeStyle::default(),
    );
    // x = 75 - 100 = -25: only columns 0..25 are covered
    assert_eq!(*out.get_pixel(0, 25), RED);
    assert_eq!(*out.get_pixel(24, 74), RED);
    assert_eq!(*out.get_pixel(25, 25), WHITE);
}

#[test]
fn test_overlay_fully_off_canvas() {
    let base = gradient(30, 20);
    let over = RgbImage::from_pixel(10, 10, RED);
    let style = CompositeStyle {
        highlight_overlay: true,
        ..CompositeStyle::default()
    };
    let out = composite(&base, (0, 0), Some(&layer(&over, 1.0, (1000, 1000), 255)), &style);
    assert_eq!(out, base);
}

#[test]
fn test_overlay_larger_than_base() {
    let base = RgbImage::from_pixel(10, 10, WHITE);
    let over = RgbImage::from_pixel(30, 30, RED);
    let out = composite(
        &base,
        (0, 0),
        Some(&layer(&over, 1.0, (0, 0), 255)),
        &CompositeStyle::default(),
    );
    assert_eq!(out.dimensions(), (10, 10));
    assert!(out.pixels().all(|p| *p == RED));
}

// ---------------------------------------------------------------------------
// Edit-mode border
// ---------------------------------------------------------------------------

#[test]
fn test_highlight_border() {
    let base = RgbImage::from_pixel(200, 100, WHITE);
    let over = RgbImage::from_pixel(50, 50, WHITE);
    let style = CompositeStyle {
        highlight_overlay: true,
        border_color: RED,
        ..CompositeStyle::default()
    };
    let out = composite(&base, (0, 0), Some(&layer(&over, 1.0, (0, 0), 255)), &style);
    assert_eq!(*out.get_pixel(75, 25), RED);
    assert_eq!(*out.get_pixel(76, 26), RED);
    assert_eq!(*out.get_pixel(77, 27), WHITE);
    assert_eq!(*out.get_pixel(124, 74), RED);
    assert_eq!(*out.get_pixel(74, 25), WHITE);
}

#[test]
fn test_highlight_border_clipped_to_canvas() {
    let base = RgbImage::from_pixel(200, 100, WHITE);
    let over = RgbImage::from_pixel(50, 50, WHITE);
    let style = CompositeStyle {
        highlight_overlay: true,
        border_color: RED,
        ..CompositeStyle::default()
    };
    // footprint x in [-25, 25): visible part starts at column 0
    let out = composite(&base, (0, 0), Some(&layer(&over, 1.0, (-100, 0), 255)), &style);
    assert_eq!(*out.get_pixel(0, 50), RED);
    assert_eq!(*out.get_pixel(1, 50), RED);
    assert_eq!(*out.get_pixel(2, 50), WHITE);
    assert_eq!(*out.get_pixel(24, 50), RED);
}

#[test]
fn test_no_highlight_without_flag() {
    let base = RgbImage::from_pixel(20, 20, WHITE);
    let over = RgbImage::from_pixel(10, 10, WHITE);
    let out = composite(
        &base,
        (0, 0),
        Some(&layer(&over, 1.0, (0, 0), 255)),
        &CompositeStyle::default(),
    );
    assert!(out.pixels().all(|p| *p == WHITE));
}

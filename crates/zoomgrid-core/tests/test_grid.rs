use image::{Rgb, RgbImage};

use zoomgrid_core::config::GridStyle;
use zoomgrid_core::grid::{draw_grid, grid_line_positions, rotated_grid_segments, GridSpec};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

fn spec(interval: u32, offset: (i32, i32), rotation_deg: f32, center: (f32, f32)) -> GridSpec {
    GridSpec {
        interval,
        offset,
        rotation_deg,
        rotation_center: center,
        visible: true,
    }
}

fn blank(w: u32, h: u32) -> RgbImage {
    RgbImage::from_pixel(w, h, WHITE)
}

// ---------------------------------------------------------------------------
// Unrotated grid
// ---------------------------------------------------------------------------

#[test]
fn test_line_positions_scenario() {
    assert_eq!(grid_line_positions(200, 50, 0), vec![0, 50, 100, 150]);
    assert_eq!(grid_line_positions(100, 50, 0), vec![0, 50]);
}

#[test]
fn test_line_positions_negative_offset_wraps_forward() {
    assert_eq!(grid_line_positions(200, 50, -30), vec![20, 70, 120, 170]);
    assert_eq!(grid_line_positions(200, 50, 130), vec![30, 80, 130, 180]);
}

#[test]
fn test_line_positions_wrap_invariant() {
    for interval in 1..=25u32 {
        for offset in -60..=60i32 {
            let positions = grid_line_positions(97, interval, offset);
            let first = positions[0];
            assert!(first < interval, "first {first} not below {interval}");
            assert_eq!(
                (first as i64 - offset as i64).rem_euclid(interval as i64),
                0,
                "interval={interval} offset={offset}"
            );
            for pair in positions.windows(2) {
                assert_eq!(pair[1] - pair[0], interval);
            }
            assert!(*positions.last().unwrap() < 97);
            assert!(positions.last().unwrap() + interval >= 97);
        }
    }
}

#[test]
fn test_line_positions_zero_interval() {
    assert!(grid_line_positions(100, 0, 0).is_empty());
}

#[test]
fn test_draw_unrotated_scenario() {
    let img = blank(200, 100);
    let out = draw_grid(&img, &spec(50, (0, 0), 0.0, (100.0, 50.0)), &GridStyle::default());

    for x in [0u32, 50, 100, 150] {
        assert_eq!(*out.get_pixel(x, 10), BLACK, "vertical line at x={x}");
    }
    for y in [0u32, 50] {
        assert_eq!(*out.get_pixel(10, y), BLACK, "horizontal line at y={y}");
    }
    assert_eq!(*out.get_pixel(51, 10), WHITE);
    assert_eq!(*out.get_pixel(10, 49), WHITE);
    assert_eq!(*out.get_pixel(199, 99), WHITE);
}

#[test]
fn test_draw_does_not_mutate_input() {
    let img = blank(40, 40);
    let _ = draw_grid(&img, &spec(10, (0, 0), 0.0, (20.0, 20.0)), &GridStyle::default());
    assert!(img.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_invisible_grid_is_identity() {
    let img = blank(40, 30);
    let mut s = spec(10, (3, 3), 30.0, (20.0, 15.0));
    s.visible = false;
    assert_eq!(draw_grid(&img, &s, &GridStyle::default()), img);
}

#[test]
fn test_custom_style() {
    let img = blank(100, 100);
    let style = GridStyle {
        color: [0, 0, 255],
        line_width: 3,
        ..GridStyle::default()
    };
    let out = draw_grid(&img, &spec(50, (0, 0), 0.0, (50.0, 50.0)), &style);
    for x in 49..=51 {
        assert_eq!(*out.get_pixel(x, 20), Rgb([0, 0, 255]));
    }
    assert_eq!(*out.get_pixel(48, 20), WHITE);
}

// ---------------------------------------------------------------------------
// Rotated grid
// ---------------------------------------------------------------------------

#[test]
fn test_rotation_coverage() {
    let (w, h) = (120u32, 80u32);
    let centers = [(60.0, 40.0), (0.0, 0.0), (119.0, 79.0), (10.0, 70.0)];
    let mut deg = 1.0f32;
    while deg < 360.0 {
        for center in centers {
            let s = spec(30, (0, 0), deg, center);
            assert!(
                !rotated_grid_segments(w, h, &s).is_empty(),
                "no segments at {deg} deg around {center:?}"
            );
            let out = draw_grid(&blank(w, h), &s, &GridStyle::default());
            assert!(
                out.pixels().any(|p| *p == BLACK),
                "nothing drawn at {deg} deg around {center:?}"
            );
        }
        deg += 7.5;
    }
}

#[test]
fn test_rotation_coverage_with_far_offset() {
    let s = spec(25, (5000, -4000), 33.0, (50.0, 50.0));
    let out = draw_grid(&blank(100, 100), &s, &GridStyle::default());
    assert!(out.pixels().any(|p| *p == BLACK));
}

#[test]
fn test_rotated_segments_touch_image() {
    let s = spec(20, (0, 0), 45.0, (50.0, 50.0));
    for seg in rotated_grid_segments(100, 100, &s) {
        assert!(seg.bbox_intersects(100.0, 100.0));
    }
}

#[test]
fn test_rotated_quarter_turn_matches_lattice() {
    // At 90 degrees the two families are axis-aligned through the centre.
    let s = spec(20, (0, 0), 90.0, (50.0, 40.0));
    let out = draw_grid(&blank(100, 80), &s, &GridStyle::default());
    assert_eq!(*out.get_pixel(30, 5), BLACK);
    assert_eq!(*out.get_pixel(50, 5), BLACK);
    assert_eq!(*out.get_pixel(5, 20), BLACK);
    assert_eq!(*out.get_pixel(31, 5), WHITE);
    assert_eq!(*out.get_pixel(5, 21), WHITE);
}

#[test]
fn test_rotated_offset_shifts_pivot() {
    let base = spec(20, (0, 0), 90.0, (50.0, 40.0));
    let shifted = spec(20, (5, 0), 90.0, (50.0, 40.0));
    let out = draw_grid(&blank(100, 80), &shifted, &GridStyle::default());
    let plain = draw_grid(&blank(100, 80), &base, &GridStyle::default());
    assert_eq!(*plain.get_pixel(30, 5), BLACK);
    assert_eq!(*out.get_pixel(35, 5), BLACK);
    assert_eq!(*out.get_pixel(30, 5), WHITE);
}

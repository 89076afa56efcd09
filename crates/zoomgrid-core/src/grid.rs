use image::RgbImage;
use tracing::debug;

use crate::config::GridStyle;
use crate::draw::{draw_hline, draw_line, draw_vline};

/// Grid geometry in the pixel space of the image it is drawn on.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Line spacing in pixels. A zero interval draws nothing.
    pub interval: u32,
    pub offset: (i32, i32),
    pub rotation_deg: f32,
    /// Pivot of the rotated families, before `offset` is added.
    pub rotation_center: (f32, f32),
    pub visible: bool,
}

/// One rotated grid line, endpoints possibly far outside the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSegment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl GridSegment {
    /// Whether the segment's bounding box touches `[0, width] x [0, height]`.
    pub fn bbox_intersects(&self, width: f32, height: f32) -> bool {
        let min_x = self.from.0.min(self.to.0);
        let max_x = self.from.0.max(self.to.0);
        let min_y = self.from.1.min(self.to.1);
        let max_y = self.from.1.max(self.to.1);
        max_x >= 0.0 && min_x <= width && max_y >= 0.0 && min_y <= height
    }
}

/// Coordinates of unrotated lines along an axis of length `len`.
///
/// The first line sits at `offset mod interval` (non-negative), then every
/// `interval` pixels.
pub fn grid_line_positions(len: u32, interval: u32, offset: i32) -> Vec<u32> {
    if interval == 0 {
        return Vec::new();
    }
    let start = (offset as i64).rem_euclid(interval as i64) as u32;
    (start..len).step_by(interval as usize).collect()
}

/// Candidate segments of both rotated line families, with bounding boxes
/// that miss the image already rejected.
pub fn rotated_grid_segments(width: u32, height: u32, spec: &GridSpec) -> Vec<GridSegment> {
    if spec.interval == 0 {
        return Vec::new();
    }

    let (sin, cos) = spec.rotation_deg.to_radians().sin_cos();
    let dir1 = (-sin, cos);
    let dir2 = (cos, sin);
    let interval = spec.interval as f32;
    let (w, h) = (width as f32, height as f32);

    let radius = ((w as f64).hypot(h as f64)).ceil() as f32 + interval;
    let k_max = (radius / interval) as i64;

    let center = anchor_near(
        (
            spec.rotation_center.0 + spec.offset.0 as f32,
            spec.rotation_center.1 + spec.offset.1 as f32,
        ),
        (w / 2.0, h / 2.0),
        dir1,
        dir2,
        interval,
    );

    let line = |through: (f32, f32), along: (f32, f32)| GridSegment {
        from: (through.0 - radius * along.0, through.1 - radius * along.1),
        to: (through.0 + radius * along.0, through.1 + radius * along.1),
    };

    let mut segments = Vec::new();
    for k in -k_max..=k_max {
        let step = k as f32 * interval;
        for (across, along) in [(dir2, dir1), (dir1, dir2)] {
            let through = (center.0 + step * across.0, center.1 + step * across.1);
            let seg = line(through, along);
            if seg.bbox_intersects(w, h) {
                segments.push(seg);
            }
        }
    }
    segments
}

/// Move `center` by whole grid cells so it lies within one cell of `target`.
/// The set of grid lines is unchanged, but a pivot dragged far off the image
/// no longer pushes every line out of range.
fn anchor_near(
    center: (f32, f32),
    target: (f32, f32),
    dir1: (f32, f32),
    dir2: (f32, f32),
    interval: f32,
) -> (f32, f32) {
    let d = (target.0 - center.0, target.1 - center.1);
    let n1 = ((d.0 * dir1.0 + d.1 * dir1.1) / interval).round();
    let n2 = ((d.0 * dir2.0 + d.1 * dir2.1) / interval).round();
    (
        center.0 + (n1 * dir1.0 + n2 * dir2.0) * interval,
        center.1 + (n1 * dir1.1 + n2 * dir2.1) * interval,
    )
}

/// Draw the grid on a copy of `image`. An invisible grid returns an
/// unchanged copy.
pub fn draw_grid(image: &RgbImage, spec: &GridSpec, style: &GridStyle) -> RgbImage {
    let mut out = image.clone();
    if !spec.visible || spec.interval == 0 {
        return out;
    }

    let color = style.rgb();
    let (width, height) = out.dimensions();

    if spec.rotation_deg == 0.0 {
        for x in grid_line_positions(width, spec.interval, spec.offset.0) {
            draw_vline(&mut out, x as i64, style.line_width, color);
        }
        for y in grid_line_positions(height, spec.interval, spec.offset.1) {
            draw_hline(&mut out, y as i64, style.line_width, color);
        }
    } else {
        let segments = rotated_grid_segments(width, height, spec);
        debug!(
            count = segments.len(),
            rotation = spec.rotation_deg,
            "drawing rotated grid"
        );
        for seg in &segments {
            draw_line(&mut out, seg.from, seg.to, style.line_width, color);
        }
    }

    out
}

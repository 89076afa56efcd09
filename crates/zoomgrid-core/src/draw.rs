use image::{Rgb, RgbImage};

/// Axis-aligned rectangle in pixel coordinates. May extend past an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle covering a whole image.
    pub fn of_image(img: &RgbImage) -> Self {
        Self::new(0, 0, img.width() as i64, img.height() as i64)
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Overlapping part of two rectangles, `None` when they do not overlap.
    pub fn intersect(&self, other: &PixelRect) -> Option<PixelRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        let r = PixelRect::new(x0, y0, x1 - x0, y1 - y0);
        if r.is_degenerate() {
            None
        } else {
            Some(r)
        }
    }
}

#[inline]
fn put_clipped(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u64) < img.width() as u64 && (y as u64) < img.height() as u64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Offsets of a `width`-pixel stroke around its centre pixel.
fn stroke_span(width: u32) -> std::ops::RangeInclusive<i64> {
    let w = width.max(1) as i64;
    let lo = -(w - 1) / 2;
    lo..=lo + w - 1
}

/// Fill a full-height vertical stroke starting at column `x`.
pub fn draw_vline(img: &mut RgbImage, x: i64, width: u32, color: Rgb<u8>) {
    let h = img.height() as i64;
    for dx in stroke_span(width) {
        for y in 0..h {
            put_clipped(img, x + dx, y, color);
        }
    }
}

/// Fill a full-width horizontal stroke starting at row `y`.
pub fn draw_hline(img: &mut RgbImage, y: i64, width: u32, color: Rgb<u8>) {
    let w = img.width() as i64;
    for dy in stroke_span(width) {
        for x in 0..w {
            put_clipped(img, x, y + dy, color);
        }
    }
}

/// Clip a segment to `[min, max]` on both axes (Liang-Barsky).
pub fn clip_segment(
    from: (f32, f32),
    to: (f32, f32),
    min: (f32, f32),
    max: (f32, f32),
) -> Option<((f32, f32), (f32, f32))> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    let checks = [
        (-dx, from.0 - min.0),
        (dx, max.0 - from.0),
        (-dy, from.1 - min.1),
        (dy, max.1 - from.1),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (from.0 + t0 * dx, from.1 + t0 * dy),
        (from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}

/// Draw a straight line of the given stroke width. Pixels falling outside the
/// image are skipped, so endpoints may lie anywhere.
pub fn draw_line(img: &mut RgbImage, from: (f32, f32), to: (f32, f32), width: u32, color: Rgb<u8>) {
    if img.width() == 0 || img.height() == 0 {
        return;
    }
    let pad = width as f32;
    let min = (-pad, -pad);
    let max = (img.width() as f32 + pad, img.height() as f32 + pad);
    let Some((a, b)) = clip_segment(from, to, min, max) else {
        return;
    };

    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let steps = dx.abs().max(dy.abs()).ceil() as i64;
    let span = stroke_span(width);

    for i in 0..=steps {
        let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
        let cx = (a.0 + t * dx).round() as i64;
        let cy = (a.1 + t * dy).round() as i64;
        for oy in span.clone() {
            for ox in span.clone() {
                put_clipped(img, cx + ox, cy + oy, color);
            }
        }
    }
}

/// Outline `rect` with a stroke `width` pixels wide, drawn inward.
/// Returns `false` (drawing nothing) for a degenerate rectangle.
pub fn draw_rect_outline(img: &mut RgbImage, rect: &PixelRect, width: u32, color: Rgb<u8>) -> bool {
    if rect.is_degenerate() {
        return false;
    }
    let w = (width.max(1) as i64).min(rect.width).min(rect.height);
    for y in rect.y..rect.bottom() {
        let on_edge_row = y < rect.y + w || y >= rect.bottom() - w;
        if on_edge_row {
            for x in rect.x..rect.right() {
                put_clipped(img, x, y, color);
            }
        } else {
            for x in (rect.x..rect.x + w).chain(rect.right() - w..rect.right()) {
                put_clipped(img, x, y, color);
            }
        }
    }
    true
}

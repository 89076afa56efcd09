use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use tracing::{debug, info, warn};

use crate::compose::{composite, CompositeStyle, OverlayLayer};
use crate::config::ViewerConfig;
use crate::consts::{
    MAX_IMAGE_DIMENSION, MIN_OVERLAY_WIDTH, PRESET_DPI, PRESET_INCH_CORRECTION,
};
use crate::error::{Result, ZoomgridError};
use crate::grid::{draw_grid, GridSpec};
use crate::io::image_io::{decode_image, load_image};
use crate::state::{EditMode, OverlayState, TransformState};
use crate::viewport::{
    canvas_to_image, centering_offset, classify_target, composite_size, overlay_canvas_bounds,
    scale_offset, zoomed_dimensions, CanvasRect, DragDelta, DragTarget, DragTracker,
    OverlayGeometry, Point, Size,
};

/// Direction of a quarter turn of the base image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Fixed output sizes offered alongside free-form `WxH` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizePreset {
    /// Seven inches square. Uses 96-dpi arithmetic minus a 90px correction
    /// per axis, whatever the label says.
    SevenBySevenInches,
    Hd,
    FullHd,
}

impl SizePreset {
    pub const ALL: &[Self] = &[Self::SevenBySevenInches, Self::Hd, Self::FullHd];

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::SevenBySevenInches => {
                let side = 7 * PRESET_DPI - PRESET_INCH_CORRECTION;
                (side, side)
            }
            Self::Hd => (1280, 720),
            Self::FullHd => (1920, 1080),
        }
    }

    /// Look a preset up by its CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "7x7" | "7x7in" | "seven" => Some(Self::SevenBySevenInches),
            "hd" | "720p" => Some(Self::Hd),
            "fullhd" | "1080p" => Some(Self::FullHd),
            _ => None,
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SevenBySevenInches => write!(f, "7x7 inches (72 dpi)"),
            Self::Hd => write!(f, "1280x720"),
            Self::FullHd => write!(f, "1920x1080"),
        }
    }
}

/// Parse `"WIDTHxHEIGHT"`. Accepts `x`, `X` or `×` and surrounding spaces.
pub fn parse_size(text: &str) -> Result<(u32, u32)> {
    let invalid = || ZoomgridError::InvalidSize(text.trim().to_string());

    let (w, h) = text
        .trim()
        .split_once(['x', 'X', '×'])
        .ok_or_else(invalid)?;
    let w: u32 = w.trim().parse().map_err(|_| invalid())?;
    let h: u32 = h.trim().parse().map_err(|_| invalid())?;

    if w == 0 || h == 0 || w > MAX_IMAGE_DIMENSION || h > MAX_IMAGE_DIMENSION {
        return Err(invalid());
    }
    Ok((w, h))
}

/// Result of feeding one pointer-move event to the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    /// No drag in progress, or the move was too small to change anything.
    Ignored,
    /// An offset in the transform state changed; re-render.
    Edited(DragTarget),
    /// Scroll the view by this canvas delta. State is untouched.
    Pan { dx: f32, dy: f32 },
}

/// One viewing session: the loaded images, their transform state and the
/// pointer drag in progress.
///
/// The originally loaded base is kept untouched; flips, rotations and
/// resizes replace the current base only.
pub struct Viewer {
    config: ViewerConfig,
    original: RgbImage,
    base: RgbImage,
    overlay_source: Option<RgbImage>,
    state: TransformState,
    drag: DragTracker,
    canvas: Size,
}

impl Viewer {
    pub fn new(base: DynamicImage, config: ViewerConfig) -> Self {
        let original = base.to_rgb8();
        info!(
            width = original.width(),
            height = original.height(),
            "viewer created"
        );
        Self {
            state: TransformState::with_grid_interval(config.grid.default_interval),
            base: original.clone(),
            original,
            overlay_source: None,
            drag: DragTracker::default(),
            canvas: (0.0, 0.0),
            config,
        }
    }

    pub fn open(path: &Path, config: ViewerConfig) -> Result<Self> {
        Ok(Self::new(load_image(path)?, config))
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Replace the style config. The transform state is kept.
    pub fn set_config(&mut self, config: ViewerConfig) {
        self.config = config;
    }

    pub fn base(&self) -> &RgbImage {
        &self.base
    }

    pub fn original(&self) -> &RgbImage {
        &self.original
    }

    pub fn overlay_source(&self) -> Option<&RgbImage> {
        self.overlay_source.as_ref()
    }

    // ---------------------------------------------------------------------
    // Zoom
    // ---------------------------------------------------------------------

    pub fn set_zoom(&mut self, zoom: f32) {
        self.state.set_zoom(zoom);
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.state.zoom_by(delta);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.view.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.config.view.zoom_step);
    }

    // ---------------------------------------------------------------------
    // Base image
    // ---------------------------------------------------------------------

    pub fn flip_horizontal(&mut self) {
        self.base = imageops::flip_horizontal(&self.base);
    }

    pub fn flip_vertical(&mut self) {
        self.base = imageops::flip_vertical(&self.base);
    }

    pub fn rotate90(&mut self, direction: Rotation) {
        self.base = match direction {
            Rotation::Clockwise => imageops::rotate90(&self.base),
            Rotation::CounterClockwise => imageops::rotate270(&self.base),
        };
    }

    /// Back to the loaded base at zoom 1 with the grid placement reset.
    pub fn reset_to_original(&mut self) {
        self.base = self.original.clone();
        self.state.set_zoom(1.0);
        self.state.grid.reset_placement();
        info!("reset to original image");
    }

    /// Resize the current base to a `WxH` string. Invalid text leaves the
    /// session unchanged.
    pub fn set_image_size(&mut self, text: &str) -> Result<()> {
        let (w, h) = parse_size(text).inspect_err(|e| warn!("{e}"))?;
        self.resize_base(w, h);
        Ok(())
    }

    pub fn apply_size_preset(&mut self, preset: SizePreset) {
        let (w, h) = preset.dimensions();
        self.resize_base(w, h);
    }

    fn resize_base(&mut self, width: u32, height: u32) {
        debug!(width, height, "resizing base");
        self.base = imageops::resize(&self.base, width, height, FilterType::CatmullRom);
    }

    pub fn pan_base(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.state.base_offset;
        self.state.base_offset = (x.saturating_add(dx), y.saturating_add(dy));
    }

    /// Decode and install a new base. A decode failure leaves the session as it was.
    pub fn load_base(&mut self, bytes: &[u8]) -> Result<()> {
        let img = decode_image(bytes).inspect_err(|e| warn!("base load failed: {e}"))?;
        self.load_base_image(img);
        Ok(())
    }

    pub fn load_base_image(&mut self, img: DynamicImage) {
        self.original = img.to_rgb8();
        self.base = self.original.clone();
        self.state.set_zoom(1.0);
        self.state.base_offset = (0, 0);
        self.drag = DragTracker::default();
        info!(
            width = self.original.width(),
            height = self.original.height(),
            "base image loaded"
        );
    }

    // ---------------------------------------------------------------------
    // Overlay
    // ---------------------------------------------------------------------

    /// Decode and install an overlay. A decode failure leaves the session as it was.
    pub fn load_overlay(&mut self, bytes: &[u8]) -> Result<()> {
        let img = decode_image(bytes).inspect_err(|e| warn!("overlay load failed: {e}"))?;
        self.load_overlay_image(img);
        Ok(())
    }

    pub fn load_overlay_image(&mut self, img: DynamicImage) {
        let rgb = img.to_rgb8();
        info!(width = rgb.width(), height = rgb.height(), "overlay loaded");
        self.overlay_source = Some(rgb);
        self.state.overlay = Some(OverlayState::new(self.config.overlay.default_opacity));
    }

    pub fn remove_overlay(&mut self) {
        self.overlay_source = None;
        self.state.overlay = None;
        if self.drag.target() == Some(DragTarget::Overlay) {
            self.drag.release();
        }
    }

    pub fn reset_overlay(&mut self) -> Result<()> {
        let opacity = self.config.overlay.default_opacity;
        *self.overlay_mut()? = OverlayState::new(opacity);
        Ok(())
    }

    pub fn set_overlay_opacity(&mut self, opacity: u8) -> Result<()> {
        self.overlay_mut()?.opacity = opacity;
        Ok(())
    }

    pub fn set_overlay_scale(&mut self, scale: f32) -> Result<()> {
        self.overlay_mut()?.set_scale(scale);
        Ok(())
    }

    /// Grow or shrink the overlay so its width changes by about `delta_px`.
    /// Width never drops below 10px and scale never below 0.1.
    pub fn resize_overlay_by(&mut self, delta_px: i32) -> Result<()> {
        let source_w = self
            .overlay_source
            .as_ref()
            .ok_or(ZoomgridError::NoOverlay)?
            .width() as f32;
        let overlay = self.overlay_mut()?;
        let new_w = (source_w * overlay.scale + delta_px as f32).max(MIN_OVERLAY_WIDTH);
        overlay.set_scale(new_w / source_w);
        Ok(())
    }

    pub fn pan_overlay(&mut self, dx: i32, dy: i32) -> Result<()> {
        let overlay = self.overlay_mut()?;
        overlay.offset = (
            overlay.offset.0.saturating_add(dx),
            overlay.offset.1.saturating_add(dy),
        );
        Ok(())
    }

    fn overlay_mut(&mut self) -> Result<&mut OverlayState> {
        self.state.overlay.as_mut().ok_or(ZoomgridError::NoOverlay)
    }

    // ---------------------------------------------------------------------
    // Grid
    // ---------------------------------------------------------------------

    pub fn set_grid_interval(&mut self, interval: i64) -> Result<()> {
        self.state
            .grid
            .set_interval(interval)
            .inspect_err(|e| warn!("{e}"))
    }

    pub fn set_grid_interval_text(&mut self, text: &str) -> Result<()> {
        self.state
            .grid
            .set_interval_text(text)
            .inspect_err(|e| warn!("{e}"))
    }

    pub fn toggle_grid_visible(&mut self) {
        self.state.grid.visible = !self.state.grid.visible;
    }

    pub fn set_grid_rotation(&mut self, deg: f32) {
        self.state.grid.set_rotation(deg);
    }

    pub fn rotate_grid_by(&mut self, deg: f32) {
        self.state.grid.set_rotation(self.state.grid.rotation_deg + deg);
    }

    /// Pivot for the rotated grid in image space; `None` uses the image centre.
    pub fn set_grid_rotation_center(&mut self, center: Option<(f32, f32)>) {
        self.state.grid.rotation_center = center.filter(|c| c.0.is_finite() && c.1.is_finite());
    }

    /// Place the grid pivot under a canvas point.
    pub fn set_grid_rotation_center_at(&mut self, pt: Point, canvas: Size) {
        let comp = composite_size(self.base.dimensions(), self.state.base_offset);
        let center = canvas_to_image(
            pt,
            self.state.zoom(),
            canvas,
            (comp.0 as f32, comp.1 as f32),
        );
        self.set_grid_rotation_center(Some(center));
    }

    pub fn pan_grid(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.state.grid.offset;
        self.state.grid.offset = (x.saturating_add(dx), y.saturating_add(dy));
    }

    pub fn reset_grid(&mut self) {
        self.state.grid.reset_placement();
    }

    // ---------------------------------------------------------------------
    // Edit mode and pointer
    // ---------------------------------------------------------------------

    pub fn set_edit_mode(&mut self, mode: EditMode) {
        self.state.set_edit_mode(mode);
    }

    pub fn toggle_edit_mode(&mut self, mode: EditMode) {
        self.state.toggle_edit_mode(mode);
    }

    /// Canvas-space bounds of the overlay, if one is loaded.
    pub fn overlay_bounds(&self, canvas: Size) -> Option<CanvasRect> {
        let overlay = self.state.overlay.as_ref()?;
        let source = self.overlay_source.as_ref()?;
        Some(overlay_canvas_bounds(
            &OverlayGeometry {
                source_size: source.dimensions(),
                scale: overlay.scale,
                offset: overlay.offset,
            },
            self.base.dimensions(),
            self.state.base_offset,
            self.state.zoom(),
            canvas,
        ))
    }

    /// Start a drag and report what it will move.
    pub fn pointer_down(&mut self, pt: Point, canvas: Size) -> DragTarget {
        self.canvas = canvas;
        let bounds = self.overlay_bounds(canvas);
        let target = classify_target(pt, self.state.edit_mode, bounds.as_ref());
        self.drag.press(pt, target);
        debug!(?target, x = pt.0, y = pt.1, "drag started");
        target
    }

    /// Apply the movement since the previous event to the dragged target.
    pub fn pointer_move(&mut self, pt: Point) -> PointerOutcome {
        match self.drag.motion(pt, self.state.zoom()) {
            None => PointerOutcome::Ignored,
            Some(DragDelta::Pan { dx, dy }) => PointerOutcome::Pan { dx, dy },
            Some(DragDelta::Edit { dx: 0, dy: 0, .. }) => PointerOutcome::Ignored,
            Some(DragDelta::Edit { target, dx, dy }) => {
                match target {
                    DragTarget::Overlay => {
                        if self.pan_overlay(dx, dy).is_err() {
                            return PointerOutcome::Ignored;
                        }
                    }
                    DragTarget::Base => self.pan_base(dx, dy),
                    DragTarget::Grid => self.pan_grid(dx, dy),
                    DragTarget::Pan => return PointerOutcome::Ignored,
                }
                PointerOutcome::Edited(target)
            }
        }
    }

    pub fn pointer_up(&mut self) -> Option<DragTarget> {
        self.drag.release()
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    fn zoomed_base(&self) -> Cow<'_, RgbImage> {
        let zoom = self.state.zoom();
        let (w, h) = zoomed_dimensions(self.base.dimensions(), zoom);
        if (w, h) == self.base.dimensions() {
            Cow::Borrowed(&self.base)
        } else {
            Cow::Owned(imageops::resize(&self.base, w, h, FilterType::CatmullRom))
        }
    }

    /// Pixel size of the image [`render`](Self::render) produces.
    pub fn display_size(&self) -> (u32, u32) {
        let zoom = self.state.zoom();
        composite_size(
            zoomed_dimensions(self.base.dimensions(), zoom),
            scale_offset(self.state.base_offset, zoom),
        )
    }

    /// Where the rendered image's top-left goes inside a canvas.
    pub fn display_offset(&self, canvas: Size) -> Point {
        let (w, h) = self.display_size();
        centering_offset(canvas, (w as f32, h as f32))
    }

    /// Last canvas size seen by [`pointer_down`](Self::pointer_down).
    pub fn last_canvas(&self) -> Size {
        self.canvas
    }

    /// Grid geometry in the pixel space of a rendered image.
    ///
    /// The interval is a spacing in rendered pixels and does not change with
    /// zoom. Offset and pivot are image-space positions (they come from drags
    /// and clicks on the image) and are scaled so they stay on the same image
    /// point.
    pub fn grid_spec(&self, rendered: (u32, u32)) -> GridSpec {
        let zoom = self.state.zoom();
        let grid = &self.state.grid;
        let rotation_center = match grid.rotation_center {
            Some((x, y)) => (x * zoom, y * zoom),
            None => (rendered.0 as f32 / 2.0, rendered.1 as f32 / 2.0),
        };
        GridSpec {
            interval: grid.interval,
            offset: scale_offset(grid.offset, zoom),
            rotation_deg: grid.rotation_deg,
            rotation_center,
            visible: grid.visible,
        }
    }

    /// Produce the displayed image: zoomed base, shifted base layer and
    /// blended overlay at the current zoom, then the grid drawn on top.
    pub fn render(&self) -> RgbImage {
        let started = Instant::now();
        let zoom = self.state.zoom();
        let base = self.zoomed_base();

        let overlay = self
            .state
            .overlay
            .as_ref()
            .zip(self.overlay_source.as_ref())
            .map(|(o, image)| OverlayLayer {
                image,
                scale: o.scale * zoom,
                offset: scale_offset(o.offset, zoom),
                opacity: o.opacity,
            });

        let style = CompositeStyle::from_config(
            &self.config,
            self.state.edit_mode == EditMode::EditOverlay,
        );
        let composed = composite(
            &base,
            scale_offset(self.state.base_offset, zoom),
            overlay.as_ref(),
            &style,
        );

        let spec = self.grid_spec(composed.dimensions());
        let out = draw_grid(&composed, &spec, &self.config.grid);

        debug!(
            width = out.width(),
            height = out.height(),
            zoom,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "rendered"
        );
        out
    }
}

use std::fmt;

use crate::consts::{DEFAULT_GRID_INTERVAL, MAX_ZOOM, MIN_OVERLAY_SCALE, MIN_ZOOM};
use crate::error::{Result, ZoomgridError};

/// What a primary-button drag on the canvas manipulates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    None,
    EditOverlay,
    MoveBase,
    MoveGrid,
}

impl EditMode {
    pub const ALL: &[Self] = &[Self::None, Self::EditOverlay, Self::MoveBase, Self::MoveGrid];
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "Pan"),
            Self::EditOverlay => write!(f, "Edit Overlay"),
            Self::MoveBase => write!(f, "Move Base"),
            Self::MoveGrid => write!(f, "Move Grid"),
        }
    }
}

/// Placement of the overlay relative to the base.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayState {
    /// Factor applied to the overlay source size. Never below [`MIN_OVERLAY_SCALE`].
    pub scale: f32,
    /// Shift from the centred position, in image pixels.
    pub offset: (i32, i32),
    /// Uniform alpha: 0 = transparent, 255 = opaque.
    pub opacity: u8,
}

impl OverlayState {
    pub fn new(opacity: u8) -> Self {
        Self {
            scale: 1.0,
            offset: (0, 0),
            opacity,
        }
    }

    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.scale = scale.max(MIN_OVERLAY_SCALE);
        }
    }
}

/// Reference grid parameters. The interval is in rendered pixels; offset and
/// pivot are in image space.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    pub visible: bool,
    /// Line spacing in rendered pixels, always > 0.
    pub interval: u32,
    pub offset: (i32, i32),
    /// Rotation in degrees, kept in `[0, 360)`.
    pub rotation_deg: f32,
    /// Pivot of the rotated grid. `None` pivots around the image centre.
    pub rotation_center: Option<(f32, f32)>,
}

impl Default for GridState {
    fn default() -> Self {
        Self::with_interval(DEFAULT_GRID_INTERVAL)
    }
}

impl GridState {
    pub fn with_interval(interval: u32) -> Self {
        Self {
            visible: true,
            interval: interval.max(1),
            offset: (0, 0),
            rotation_deg: 0.0,
            rotation_center: None,
        }
    }

    /// Set the spacing. Zero and negative values are rejected.
    pub fn set_interval(&mut self, interval: i64) -> Result<()> {
        match u32::try_from(interval) {
            Ok(v) if v > 0 => {
                self.interval = v;
                Ok(())
            }
            _ => Err(ZoomgridError::InvalidGridInterval(interval.to_string())),
        }
    }

    /// Parse user text as the spacing. Anything but a positive integer is rejected.
    pub fn set_interval_text(&mut self, text: &str) -> Result<()> {
        let trimmed = text.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ZoomgridError::InvalidGridInterval(trimmed.to_string()))?;
        self.set_interval(value)
    }

    pub fn set_rotation(&mut self, deg: f32) {
        if deg.is_finite() {
            let r = deg.rem_euclid(360.0);
            // rem_euclid can round up to exactly 360.0 for tiny negative inputs
            self.rotation_deg = if r >= 360.0 { 0.0 } else { r };
        }
    }

    /// Restore offset, rotation and pivot; spacing and visibility are kept.
    pub fn reset_placement(&mut self) {
        self.offset = (0, 0);
        self.rotation_deg = 0.0;
        self.rotation_center = None;
    }
}

/// Everything the renderer needs besides the pixels themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformState {
    zoom: f32,
    pub base_offset: (i32, i32),
    pub overlay: Option<OverlayState>,
    pub grid: GridState,
    pub edit_mode: EditMode,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            base_offset: (0, 0),
            overlay: None,
            grid: GridState::default(),
            edit_mode: EditMode::None,
        }
    }
}

impl TransformState {
    pub fn with_grid_interval(interval: u32) -> Self {
        Self {
            grid: GridState::with_interval(interval),
            ..Self::default()
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Non-finite input is ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.set_zoom(self.zoom + delta);
    }

    /// Selecting a mode replaces whichever mode was active.
    pub fn set_edit_mode(&mut self, mode: EditMode) {
        self.edit_mode = mode;
    }

    /// Select `mode`, or fall back to [`EditMode::None`] if it is already active.
    pub fn toggle_edit_mode(&mut self, mode: EditMode) {
        self.edit_mode = if self.edit_mode == mode {
            EditMode::None
        } else {
            mode
        };
    }
}

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f32 = 0.5;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f32 = 3.0;

/// Zoom change applied by one wheel notch or zoom shortcut.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Grid spacing in image pixels at startup.
pub const DEFAULT_GRID_INTERVAL: u32 = 100;

/// Overlay scale never drops below this factor.
pub const MIN_OVERLAY_SCALE: f32 = 0.1;

/// Overlay width never drops below this many pixels when resized.
pub const MIN_OVERLAY_WIDTH: f32 = 10.0;

/// Overlay opacity assigned on load and on reset (0 = transparent, 255 = opaque).
pub const DEFAULT_OVERLAY_OPACITY: u8 = 128;

/// Outline width of the overlay highlight in edit-overlay mode.
pub const DEFAULT_BORDER_WIDTH: u32 = 2;

/// Overlay highlight colour.
pub const DEFAULT_BORDER_COLOR: [u8; 3] = [255, 0, 0];

/// Grid line colour.
pub const DEFAULT_GRID_COLOR: [u8; 3] = [0, 0, 0];

/// Fill colour of the canvas exposed by a shifted base.
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Screen DPI used by the inch-based size preset.
pub const PRESET_DPI: u32 = 96;

/// Pixel correction subtracted per axis by the inch-based size preset.
pub const PRESET_INCH_CORRECTION: u32 = 90;

/// Largest width or height accepted for a user-requested resize.
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

use std::path::Path;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BACKGROUND, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH, DEFAULT_GRID_COLOR,
    DEFAULT_GRID_INTERVAL, DEFAULT_OVERLAY_OPACITY, DEFAULT_ZOOM_STEP,
};
use crate::error::{Result, ZoomgridError};

/// Styling and startup defaults for a viewer session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub grid: GridStyle,
    #[serde(default)]
    pub overlay: OverlayStyle,
    #[serde(default)]
    pub view: ViewStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    /// RGB colour of grid lines.
    pub color: [u8; 3],
    /// Line thickness in pixels.
    pub line_width: u32,
    /// Grid spacing used at startup.
    pub default_interval: u32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_GRID_COLOR,
            line_width: 1,
            default_interval: DEFAULT_GRID_INTERVAL,
        }
    }
}

impl GridStyle {
    pub fn rgb(&self) -> Rgb<u8> {
        Rgb(self.color)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// RGB colour of the edit-mode outline.
    pub border_color: [u8; 3],
    pub border_width: u32,
    /// Opacity given to a freshly loaded or reset overlay.
    pub default_opacity: u8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            border_color: DEFAULT_BORDER_COLOR,
            border_width: DEFAULT_BORDER_WIDTH,
            default_opacity: DEFAULT_OVERLAY_OPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewStyle {
    /// Fill colour for canvas exposed by shifting the base.
    pub background: [u8; 3],
    /// Zoom increment per wheel notch / shortcut.
    pub zoom_step: f32,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a TOML document. Missing tables fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ViewerConfig =
            toml::from_str(s).map_err(|e| ZoomgridError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ZoomgridError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid.line_width == 0 {
            return Err(ZoomgridError::InvalidConfig(
                "grid.line_width must be > 0".into(),
            ));
        }
        if self.grid.default_interval == 0 {
            return Err(ZoomgridError::InvalidConfig(
                "grid.default_interval must be > 0".into(),
            ));
        }
        if !(self.view.zoom_step.is_finite() && self.view.zoom_step > 0.0) {
            return Err(ZoomgridError::InvalidConfig(format!(
                "view.zoom_step must be a positive number, got {}",
                self.view.zoom_step
            )));
        }
        Ok(())
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;
use zoomgrid_core::config::ViewerConfig;
use zoomgrid_core::io::image_io::{load_image, save_image};
use zoomgrid_core::state::EditMode;
use zoomgrid_core::viewer::{Rotation, SizePreset, Viewer};

use crate::summary::print_render_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum RotateArg {
    Cw,
    Ccw,
}

impl From<RotateArg> for Rotation {
    fn from(r: RotateArg) -> Self {
        match r {
            RotateArg::Cw => Rotation::Clockwise,
            RotateArg::Ccw => Rotation::CounterClockwise,
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Base image file
    pub base: PathBuf,

    /// Output file path (format from extension, PNG if unknown)
    #[arg(short, long, default_value = "composite.png")]
    pub output: PathBuf,

    /// Style config TOML (see `zoomgrid config`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Zoom factor (0.5 to 3.0)
    #[arg(long)]
    pub zoom: Option<f32>,

    /// Resize the base to "WxH" (e.g. "800x600")
    #[arg(long, conflicts_with = "preset")]
    pub size: Option<String>,

    /// Resize the base to a preset: 7x7, hd, fullhd
    #[arg(long)]
    pub preset: Option<String>,

    /// Mirror the base left to right
    #[arg(long)]
    pub flip_h: bool,

    /// Mirror the base top to bottom
    #[arg(long)]
    pub flip_v: bool,

    /// Quarter-turn the base
    #[arg(long, value_enum)]
    pub rotate: Option<RotateArg>,

    /// Shift the base: "dx,dy" in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub base_offset: Option<String>,

    /// Overlay image file
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Overlay scale factor (minimum 0.1)
    #[arg(long, requires = "overlay")]
    pub overlay_scale: Option<f32>,

    /// Overlay shift from centre: "dx,dy" in pixels
    #[arg(long, requires = "overlay", allow_hyphen_values = true)]
    pub overlay_offset: Option<String>,

    /// Overlay opacity (0 = transparent, 255 = opaque)
    #[arg(long, requires = "overlay")]
    pub opacity: Option<u8>,

    /// Grid spacing in pixels
    #[arg(long)]
    pub grid_interval: Option<i64>,

    /// Grid shift: "dx,dy" in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub grid_offset: Option<String>,

    /// Grid rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub grid_rotation: Option<f32>,

    /// Grid rotation centre: "x,y" in image pixels
    #[arg(long)]
    pub grid_center: Option<String>,

    /// Do not draw the grid
    #[arg(long)]
    pub no_grid: bool,

    /// Outline the overlay as in edit mode
    #[arg(long, requires = "overlay")]
    pub highlight_overlay: bool,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    let base = load_image(&args.base)
        .with_context(|| format!("Failed to load {}", args.base.display()))?;
    let mut viewer = Viewer::new(base, config);
    debug!(base = %args.base.display(), "applying render options");

    if let Some(ref size) = args.size {
        viewer.set_image_size(size)?;
    }
    if let Some(ref name) = args.preset {
        let Some(preset) = SizePreset::from_name(name) else {
            anyhow::bail!("Unknown preset '{}' (expected 7x7, hd or fullhd)", name);
        };
        viewer.apply_size_preset(preset);
    }
    if args.flip_h {
        viewer.flip_horizontal();
    }
    if args.flip_v {
        viewer.flip_vertical();
    }
    if let Some(rotate) = args.rotate {
        viewer.rotate90(rotate.into());
    }
    if let Some(ref s) = args.base_offset {
        let (dx, dy) = parse_pair::<i32>(s, "base offset")?;
        viewer.pan_base(dx, dy);
    }
    if let Some(zoom) = args.zoom {
        viewer.set_zoom(zoom);
    }

    if let Some(ref path) = args.overlay {
        let overlay =
            load_image(path).with_context(|| format!("Failed to load {}", path.display()))?;
        viewer.load_overlay_image(overlay);
        if let Some(scale) = args.overlay_scale {
            viewer.set_overlay_scale(scale)?;
        }
        if let Some(ref s) = args.overlay_offset {
            let (dx, dy) = parse_pair::<i32>(s, "overlay offset")?;
            viewer.pan_overlay(dx, dy)?;
        }
        if let Some(opacity) = args.opacity {
            viewer.set_overlay_opacity(opacity)?;
        }
        if args.highlight_overlay {
            viewer.set_edit_mode(EditMode::EditOverlay);
        }
    }

    if let Some(interval) = args.grid_interval {
        viewer.set_grid_interval(interval)?;
    }
    if let Some(ref s) = args.grid_offset {
        let (dx, dy) = parse_pair::<i32>(s, "grid offset")?;
        viewer.pan_grid(dx, dy);
    }
    if let Some(deg) = args.grid_rotation {
        viewer.set_grid_rotation(deg);
    }
    if let Some(ref s) = args.grid_center {
        let center = parse_pair::<f32>(s, "grid center")?;
        viewer.set_grid_rotation_center(Some(center));
    }
    if args.no_grid {
        viewer.toggle_grid_visible();
    }

    print_render_summary(&viewer, &args.base, args.overlay.as_deref(), &args.output);

    let out = viewer.render();
    save_image(&out, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved {}x{} composite to {}", out.width(), out.height(), args.output.display());

    Ok(())
}

/// Parse "a,b" into two values.
fn parse_pair<T: std::str::FromStr>(s: &str, what: &str) -> Result<(T, T)> {
    let invalid = || anyhow::anyhow!("Invalid {} '{}' (expected 'a,b')", what, s);
    let (a, b) = s.split_once(',').ok_or_else(invalid)?;
    let a = a.trim().parse::<T>().map_err(|_| invalid())?;
    let b = b.trim().parse::<T>().map_err(|_| invalid())?;
    Ok((a, b))
}

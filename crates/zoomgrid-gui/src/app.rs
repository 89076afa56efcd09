use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;
use zoomgrid_core::config::ViewerConfig;
use zoomgrid_core::io::image_io::{load_image, save_image};
use zoomgrid_core::viewer::Viewer;

use crate::convert::rgb_to_color_image;
use crate::panels;
use crate::states::{UIState, ViewportState};

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "gif", "webp"];

pub struct ZoomgridApp {
    pub viewer: Option<Viewer>,
    pub config: ViewerConfig,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
    /// The viewer changed since the texture was last uploaded.
    dirty: bool,
}

impl ZoomgridApp {
    pub fn new() -> Self {
        let config = ViewerConfig::default();
        let ui_state = UIState {
            interval_text: config.grid.default_interval.to_string(),
            ..UIState::default()
        };
        Self {
            viewer: None,
            config,
            ui_state,
            viewport: ViewportState::default(),
            show_about: false,
            dirty: false,
        }
    }

    /// Run an intent against the viewer and schedule a re-render.
    pub fn apply(&mut self, f: impl FnOnce(&mut Viewer)) {
        if let Some(viewer) = self.viewer.as_mut() {
            f(viewer);
            self.dirty = true;
        }
    }

    /// Like [`apply`](Self::apply) for intents that can reject their input.
    /// Rejections are logged and leave the view as it was.
    pub fn try_apply(&mut self, f: impl FnOnce(&mut Viewer) -> zoomgrid_core::error::Result<()>) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };
        match f(viewer) {
            Ok(()) => self.dirty = true,
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn open_base(&mut self, path: &Path) {
        match self.load_base(path) {
            Ok(()) => {
                if let Some(v) = self.viewer.as_ref() {
                    let (w, h) = v.base().dimensions();
                    self.ui_state.size_text = format!("{w}x{h}");
                    self.ui_state
                        .add_log(format!("Opened: {} ({w}x{h})", path.display()));
                }
                self.ui_state.base_path = Some(path.to_path_buf());
                self.viewport.pan_offset = egui::Vec2::ZERO;
                self.dirty = true;
            }
            Err(e) => {
                warn!("{e:#}");
                self.ui_state.add_log(format!("ERROR: {e:#}"));
            }
        }
    }

    fn load_base(&mut self, path: &Path) -> Result<()> {
        match self.viewer.as_mut() {
            Some(viewer) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                viewer
                    .load_base(&bytes)
                    .with_context(|| format!("Failed to decode {}", path.display()))?;
            }
            None => {
                let img = load_image(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?;
                self.viewer = Some(Viewer::new(img, self.config.clone()));
            }
        }
        Ok(())
    }

    pub fn open_overlay(&mut self, path: &Path) {
        let Some(viewer) = self.viewer.as_mut() else {
            self.ui_state.add_log("Open a base image first".into());
            return;
        };
        let result = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))
            .and_then(|bytes| {
                viewer
                    .load_overlay(&bytes)
                    .with_context(|| format!("Failed to decode {}", path.display()))
            });
        match result {
            Ok(()) => {
                self.ui_state
                    .add_log(format!("Overlay: {}", path.display()));
                self.ui_state.overlay_path = Some(path.to_path_buf());
                self.dirty = true;
            }
            Err(e) => {
                warn!("{e:#}");
                self.ui_state.add_log(format!("ERROR: {e:#}"));
            }
        }
    }

    pub fn remove_overlay(&mut self) {
        self.apply(|v| v.remove_overlay());
        self.ui_state.overlay_path = None;
    }

    pub fn save_composite(&mut self, path: &Path) {
        let Some(viewer) = self.viewer.as_ref() else {
            return;
        };
        let rendered = viewer.render();
        match save_image(&rendered, path)
            .with_context(|| format!("Failed to save {}", path.display()))
        {
            Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Err(e) => {
                warn!("{e:#}");
                self.ui_state.add_log(format!("ERROR: {e:#}"));
            }
        }
    }

    /// Load a style TOML and apply it to the current and future sessions.
    pub fn import_style(&mut self, path: &Path) {
        match ViewerConfig::load(path) {
            Ok(config) => {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.set_config(config.clone());
                }
                self.config = config;
                self.ui_state
                    .add_log(format!("Style imported: {}", path.display()));
                self.dirty = true;
            }
            Err(e) => {
                warn!("{e}");
                self.ui_state
                    .add_log(format!("ERROR: {}: {e}", path.display()));
            }
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        self.dirty = false;
        let Some(viewer) = self.viewer.as_ref() else {
            self.viewport.texture = None;
            self.viewport.image_size = None;
            return;
        };
        let image = rgb_to_color_image(&viewer.render());
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
    }
}

impl eframe::App for ZoomgridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.dirty {
            self.refresh_texture(ctx);
            ctx.request_repaint();
        }

        if self.show_about {
            egui::Window::new("About Zoomgrid")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Zoomgrid");
                        ui.label("Image overlay and reference grid viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

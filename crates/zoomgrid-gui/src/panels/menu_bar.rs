use zoomgrid_core::viewer::{Rotation, SizePreset};

use crate::app::{ZoomgridApp, IMAGE_EXTENSIONS};

const OPEN: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const OPEN_OVERLAY: egui::KeyboardShortcut = egui::KeyboardShortcut::new(
    egui::Modifiers::COMMAND.plus(egui::Modifiers::SHIFT),
    egui::Key::O,
);
const SAVE: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const QUIT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
const TOGGLE_GRID: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::G);
const ZOOM_IN: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Plus);
const ZOOM_OUT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Minus);

pub fn show(ctx: &egui::Context, app: &mut ZoomgridApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&OPEN))).clicked() {
                    ui.close();
                    open_base(app);
                }
                if ui.add(egui::Button::new("Open Overlay...").shortcut_text(ctx.format_shortcut(&OPEN_OVERLAY))).clicked() {
                    ui.close();
                    open_overlay(app);
                }
                if ui.button("Remove Overlay").clicked() {
                    ui.close();
                    app.remove_overlay();
                }

                ui.separator();

                if ui.add(egui::Button::new("Save Composite...").shortcut_text(ctx.format_shortcut(&SAVE))).clicked() {
                    ui.close();
                    save_composite(app);
                }
                if ui.button("Import Style...").clicked() {
                    ui.close();
                    import_style(app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&QUIT))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Image", |ui| {
                if ui.button("Flip Horizontal").clicked() {
                    ui.close();
                    app.apply(|v| v.flip_horizontal());
                }
                if ui.button("Flip Vertical").clicked() {
                    ui.close();
                    app.apply(|v| v.flip_vertical());
                }
                if ui.button("Rotate 90\u{b0} CW").clicked() {
                    ui.close();
                    app.apply(|v| v.rotate90(Rotation::Clockwise));
                }
                if ui.button("Rotate 90\u{b0} CCW").clicked() {
                    ui.close();
                    app.apply(|v| v.rotate90(Rotation::CounterClockwise));
                }

                ui.separator();

                ui.menu_button("Size Preset", |ui| {
                    for &preset in SizePreset::ALL {
                        if ui.button(preset.to_string()).clicked() {
                            ui.close();
                            app.apply(|v| v.apply_size_preset(preset));
                            let (w, h) = preset.dimensions();
                            app.ui_state.size_text = format!("{w}x{h}");
                        }
                    }
                });

                ui.separator();

                if ui.button("Reset to Original").clicked() {
                    ui.close();
                    app.apply(|v| v.reset_to_original());
                    app.viewport.pan_offset = egui::Vec2::ZERO;
                    if let Some(v) = app.viewer.as_ref() {
                        let (w, h) = v.base().dimensions();
                        app.ui_state.size_text = format!("{w}x{h}");
                    }
                }
            });

            ui.menu_button("Grid", |ui| {
                if ui.add(egui::Button::new("Show / Hide").shortcut_text(ctx.format_shortcut(&TOGGLE_GRID))).clicked() {
                    ui.close();
                    app.apply(|v| v.toggle_grid_visible());
                }
                if ui.button("Reset Grid").clicked() {
                    ui.close();
                    app.apply(|v| v.reset_grid());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_OVERLAY)) {
            open_overlay(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN)) {
            open_base(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE)) {
            save_composite(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&TOGGLE_GRID)) {
            app.apply(|v| v.toggle_grid_visible());
        }
        if ctx.input_mut(|i| i.consume_shortcut(&ZOOM_IN)) {
            app.apply(|v| v.zoom_in());
        }
        if ctx.input_mut(|i| i.consume_shortcut(&ZOOM_OUT)) {
            app.apply(|v| v.zoom_out());
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn open_base(app: &mut ZoomgridApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.open_base(&path);
    }
}

pub(crate) fn open_overlay(app: &mut ZoomgridApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.open_overlay(&path);
    }
}

fn save_composite(app: &mut ZoomgridApp) {
    if app.viewer.is_none() {
        return;
    }
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .add_filter("TIFF", &["tiff", "tif"])
        .add_filter("BMP", &["bmp"])
        .set_file_name("composite.png")
        .save_file()
    {
        app.save_composite(&path);
    }
}

fn import_style(app: &mut ZoomgridApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("TOML", &["toml"])
        .pick_file()
    {
        app.import_style(&path);
    }
}

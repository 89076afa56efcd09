use zoomgrid_core::viewer::{Rotation, SizePreset};

use crate::app::ZoomgridApp;
use crate::panels::menu_bar;

pub(super) fn image_section(ui: &mut egui::Ui, app: &mut ZoomgridApp) {
    let status = app
        .viewer
        .as_ref()
        .map(|v| {
            let (w, h) = v.base().dimensions();
            format!("{w}x{h}")
        });
    super::section_header(ui, "Image", status.as_deref());
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        menu_bar::open_base(app);
    }

    if let Some(ref path) = app.ui_state.base_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }

    if app.viewer.is_none() {
        return;
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Size");
        let submitted = super::submit_field(ui, &mut app.ui_state.size_text, 90.0);
        if submitted || ui.button("Apply").clicked() {
            let text = app.ui_state.size_text.clone();
            app.try_apply(|v| v.set_image_size(&text));
        }
    });

    ui.horizontal_wrapped(|ui| {
        for &preset in SizePreset::ALL {
            if ui.small_button(preset.to_string()).clicked() {
                app.apply(|v| v.apply_size_preset(preset));
                let (w, h) = preset.dimensions();
                app.ui_state.size_text = format!("{w}x{h}");
            }
        }
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("\u{2194} Flip").clicked() {
            app.apply(|v| v.flip_horizontal());
        }
        if ui.button("\u{2195} Flip").clicked() {
            app.apply(|v| v.flip_vertical());
        }
        if ui.button("\u{21bb}").on_hover_text("Rotate 90\u{b0} clockwise").clicked() {
            app.apply(|v| v.rotate90(Rotation::Clockwise));
        }
        if ui.button("\u{21ba}").on_hover_text("Rotate 90\u{b0} counter-clockwise").clicked() {
            app.apply(|v| v.rotate90(Rotation::CounterClockwise));
        }
    });

    if ui.button("Reset to Original").clicked() {
        app.apply(|v| v.reset_to_original());
        app.viewport.pan_offset = egui::Vec2::ZERO;
    }
}

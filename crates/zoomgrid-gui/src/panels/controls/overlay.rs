use crate::app::ZoomgridApp;
use crate::panels::menu_bar;

/// Width change per press of the size buttons, in pixels.
const RESIZE_STEP: i32 = 10;

pub(super) fn overlay_section(ui: &mut egui::Ui, app: &mut ZoomgridApp) {
    let overlay = app
        .viewer
        .as_ref()
        .and_then(|v| v.state().overlay.clone());
    let status = overlay.as_ref().map(|o| format!("{:.0}%", o.scale * 100.0));
    super::section_header(ui, "Overlay", status.as_deref());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(app.viewer.is_some(), egui::Button::new("Open..."))
            .clicked()
        {
            menu_bar::open_overlay(app);
        }
        if ui
            .add_enabled(overlay.is_some(), egui::Button::new("Remove"))
            .clicked()
        {
            app.remove_overlay();
        }
    });

    let Some(overlay) = overlay else {
        return;
    };

    if let Some(ref path) = app.ui_state.overlay_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }

    let mut opacity = overlay.opacity;
    if ui
        .add(egui::Slider::new(&mut opacity, 0..=255).text("Opacity"))
        .changed()
    {
        app.try_apply(|v| v.set_overlay_opacity(opacity));
    }

    ui.horizontal(|ui| {
        ui.label("Size");
        if ui.button("\u{2212}").clicked() {
            app.try_apply(|v| v.resize_overlay_by(-RESIZE_STEP));
        }
        if ui.button("+").clicked() {
            app.try_apply(|v| v.resize_overlay_by(RESIZE_STEP));
        }
        ui.small(format!("offset {}, {}", overlay.offset.0, overlay.offset.1));
    });

    if ui.button("Reset Overlay").clicked() {
        app.try_apply(|v| v.reset_overlay());
    }
}

use crate::app::ZoomgridApp;

pub fn show(ctx: &egui::Context, app: &mut ZoomgridApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(viewer) = app.viewer.as_ref() {
                let (w, h) = viewer.base().dimensions();
                ui.label(format!("{w}x{h}"));
                ui.separator();
                if let Some(size) = app.viewport.image_size {
                    ui.label(format!("Rendered {}x{}", size[0], size[1]));
                    ui.separator();
                }
                let state = viewer.state();
                ui.label(format!("Zoom: {:.0}%", state.zoom() * 100.0));
                ui.separator();
                ui.label(format!("Mode: {}", state.edit_mode));
            } else {
                ui.label("No image");
            }
        });

        ui.add_space(2.0);
    });
}

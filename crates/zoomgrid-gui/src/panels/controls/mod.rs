mod base;
mod grid;
mod overlay;
mod view;

const LEFT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::ZoomgridApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                base::image_section(ui, app);
                ui.separator();
                view::view_section(ui, app);
                ui.separator();
                overlay::overlay_section(ui, app);
                ui.separator();
                grid::grid_section(ui, app);
            });
        });
}

fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Single-line text field that reports true when Enter is pressed in it.
fn submit_field(ui: &mut egui::Ui, text: &mut String, width: f32) -> bool {
    let response = ui.add(egui::TextEdit::singleline(text).desired_width(width));
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

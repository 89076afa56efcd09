use zoomgrid_core::consts::{MAX_ZOOM, MIN_ZOOM};
use zoomgrid_core::state::EditMode;

use crate::app::ZoomgridApp;

pub(super) fn view_section(ui: &mut egui::Ui, app: &mut ZoomgridApp) {
    super::section_header(ui, "View", None);
    ui.add_space(4.0);

    let Some((mut zoom, mut mode)) = app
        .viewer
        .as_ref()
        .map(|v| (v.state().zoom(), v.state().edit_mode))
    else {
        ui.weak("No image loaded");
        return;
    };

    let response = ui.add(
        egui::Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
            .text("Zoom")
            .step_by(0.05)
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.apply(|v| v.set_zoom(zoom));
    }

    ui.add_space(4.0);
    ui.label("Drag mode");
    let before = mode;
    ui.horizontal_wrapped(|ui| {
        for &m in EditMode::ALL {
            ui.selectable_value(&mut mode, m, m.to_string());
        }
    });
    if mode != before {
        app.apply(|v| v.set_edit_mode(mode));
    }
    ui.small("Shift-click the image to place the grid rotation centre.");
}

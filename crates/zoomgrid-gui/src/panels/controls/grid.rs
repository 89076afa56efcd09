use crate::app::ZoomgridApp;

pub(super) fn grid_section(ui: &mut egui::Ui, app: &mut ZoomgridApp) {
    let Some(grid) = app.viewer.as_ref().map(|v| v.state().grid.clone()) else {
        super::section_header(ui, "Grid", None);
        return;
    };
    let status = format!("{} px", grid.interval);
    super::section_header(ui, "Grid", Some(&status));
    ui.add_space(4.0);

    let mut visible = grid.visible;
    if ui.checkbox(&mut visible, "Show grid").changed() {
        app.apply(|v| v.toggle_grid_visible());
    }

    ui.horizontal(|ui| {
        ui.label("Interval");
        let submitted = super::submit_field(ui, &mut app.ui_state.interval_text, 60.0);
        if submitted || ui.button("Apply").clicked() {
            let text = app.ui_state.interval_text.clone();
            app.try_apply(|v| v.set_grid_interval_text(&text));
        }
    });

    let mut rotation = grid.rotation_deg;
    if ui
        .add(
            egui::Slider::new(&mut rotation, 0.0..=359.9)
                .text("Rotation")
                .suffix("\u{b0}")
                .step_by(0.5),
        )
        .changed()
    {
        app.apply(|v| v.set_grid_rotation(rotation));
    }

    ui.horizontal(|ui| {
        match grid.rotation_center {
            Some((x, y)) => ui.small(format!("Centre {x:.0}, {y:.0}")),
            None => ui.small("Centre: image centre"),
        };
        if grid.rotation_center.is_some() && ui.small_button("Clear").clicked() {
            app.apply(|v| v.set_grid_rotation_center(None));
        }
    });

    ui.small(format!("Offset {}, {}", grid.offset.0, grid.offset.1));

    if ui.button("Reset Grid").clicked() {
        app.apply(|v| v.reset_grid());
    }
}

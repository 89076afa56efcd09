use zoomgrid_core::viewer::PointerOutcome;
use zoomgrid_core::viewport::{zoom_anchor_pan, Point, Size};

use crate::app::ZoomgridApp;

pub fn show(ctx: &egui::Context, app: &mut ZoomgridApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), t.size_vec2()));

        let Some((texture_id, tex_size)) = texture_info.filter(|_| app.viewer.is_some()) else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        handle_zoom(ui, &response, app, rect);
        handle_pointer(ui, &response, app, rect);
        handle_pan(&response, app);

        let img_rect = compute_img_rect(rect, tex_size, app);
        draw_image(ui, texture_id, img_rect);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn canvas_size(rect: egui::Rect) -> Size {
    (rect.width(), rect.height())
}

/// Pointer position in the viewer's canvas space: relative to the panel
/// origin, with the scroll offset removed.
fn canvas_point(pos: egui::Pos2, rect: egui::Rect, pan: egui::Vec2) -> Point {
    let p = pos - rect.min - pan;
    (p.x, p.y)
}

/// One zoom step per wheel notch, keeping the pixel under the cursor fixed.
fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut ZoomgridApp, rect: egui::Rect) {
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if scroll == 0.0 || !response.hovered() {
        return;
    }
    let Some(viewer) = app.viewer.as_mut() else {
        return;
    };

    let canvas = canvas_size(rect);
    let old_zoom = viewer.state().zoom();
    let before = viewer.display_offset(canvas);
    if scroll > 0.0 {
        viewer.zoom_in();
    } else {
        viewer.zoom_out();
    }
    let new_zoom = viewer.state().zoom();
    if new_zoom == old_zoom {
        return;
    }
    let after = viewer.display_offset(canvas);

    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let pan = app.viewport.pan_offset;
        let anchor = rect.min + egui::vec2(before.0, before.1) + pan;
        let rel = mouse_pos - anchor;
        let (x, y) = zoom_anchor_pan((pan.x, pan.y), (rel.x, rel.y), old_zoom, new_zoom);
        // The centring offset moves with the image size too.
        app.viewport.pan_offset = egui::vec2(x + before.0 - after.0, y + before.1 - after.1);
    }

    app.mark_dirty();
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, app: &mut ZoomgridApp, rect: egui::Rect) {
    let canvas = canvas_size(rect);
    let shift = ui.input(|i| i.modifiers.shift);

    if shift && response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            let pt = canvas_point(pos, rect, app.viewport.pan_offset);
            app.apply(|v| v.set_grid_rotation_center_at(pt, canvas));
            if let Some((x, y)) = app
                .viewer
                .as_ref()
                .and_then(|v| v.state().grid.rotation_center)
            {
                app.ui_state
                    .add_log(format!("Grid rotation centre set to {x:.0}, {y:.0}"));
            }
        }
        return;
    }

    let Some(viewer) = app.viewer.as_mut() else {
        return;
    };
    let mut edited = false;

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            let pan = app.viewport.pan_offset;
            app.viewport.drag_pan = Some(pan);
            viewer.pointer_down(canvas_point(pos, rect, pan), canvas);
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let (Some(pos), Some(pan)) = (response.interact_pointer_pos(), app.viewport.drag_pan) {
            match viewer.pointer_move(canvas_point(pos, rect, pan)) {
                PointerOutcome::Edited(_) => edited = true,
                PointerOutcome::Pan { dx, dy } => app.viewport.pan_offset += egui::vec2(dx, dy),
                PointerOutcome::Ignored => {}
            }
        }
    }

    if response.drag_stopped() && app.viewport.drag_pan.take().is_some() {
        viewer.pointer_up();
    }

    if edited {
        app.mark_dirty();
    }
}

fn handle_pan(response: &egui::Response, app: &mut ZoomgridApp) {
    if response.dragged_by(egui::PointerButton::Middle) {
        app.viewport.pan_offset += response.drag_delta();
    }
}

fn compute_img_rect(rect: egui::Rect, tex_size: egui::Vec2, app: &ZoomgridApp) -> egui::Rect {
    let offset = app
        .viewer
        .as_ref()
        .map(|v| v.display_offset(canvas_size(rect)))
        .unwrap_or((0.0, 0.0));
    let min = rect.min + egui::vec2(offset.0, offset.1) + app.viewport.pan_offset;
    egui::Rect::from_min_size(min, tex_size)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

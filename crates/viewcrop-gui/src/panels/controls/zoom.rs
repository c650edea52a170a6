use crate::app::ViewcropApp;

const TRACK_HEIGHT: f32 = 20.0;

/// The zoom track: press or drag along it to zoom, the knob follows.
pub(super) fn zoom_section(ui: &mut egui::Ui, app: &mut ViewcropApp) {
    let percent = app.session.viewport().zoom_percent();
    let status = format!("{percent:.0}%");
    crate::panels::section_header(ui, "Zoom", Some(&status));
    ui.add_space(4.0);

    let track = app.session.zoom().track();
    let enabled = app.session.viewport().is_ready();
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(track.extent as f32, TRACK_HEIGHT),
        if enabled {
            egui::Sense::click_and_drag()
        } else {
            egui::Sense::hover()
        },
    );

    let position = response
        .interact_pointer_pos()
        .map(|pos| (pos.x - rect.left()) as f64);

    if response.drag_started() || response.clicked() {
        let press_at = ui
            .input(|i| i.pointer.press_origin())
            .map(|pos| (pos.x - rect.left()) as f64)
            .or(position);
        if let Some(x) = press_at {
            app.session.zoom_press(x);
        }
    }
    if response.dragged() {
        if let Some(x) = position {
            app.session.zoom_drag(x);
        }
    }
    if response.drag_stopped() || response.clicked() {
        app.session.zoom_release();
    }

    draw_track(ui, rect, track.knob_width as f32, app.session.zoom_marker() as f32, enabled);

    ui.add_space(4.0);
    if ui
        .add_enabled(enabled && percent > 0.0, egui::Button::new("Reset Zoom"))
        .clicked()
    {
        app.session.reset_zoom();
    }
}

fn draw_track(ui: &egui::Ui, rect: egui::Rect, knob_width: f32, marker: f32, enabled: bool) {
    let painter = ui.painter();
    let visuals = ui.visuals();

    let line_y = rect.center().y;
    painter.line_segment(
        [egui::pos2(rect.left(), line_y), egui::pos2(rect.right(), line_y)],
        egui::Stroke::new(2.0, visuals.widgets.inactive.bg_fill),
    );

    let knob = egui::Rect::from_min_size(
        egui::pos2(rect.left() + marker, rect.top()),
        egui::vec2(knob_width, rect.height()),
    );
    let fill = if enabled {
        visuals.selection.bg_fill
    } else {
        visuals.widgets.noninteractive.bg_fill
    };
    painter.rect_filled(knob, 3.0, fill);
}

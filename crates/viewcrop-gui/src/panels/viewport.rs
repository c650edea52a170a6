use tracing::warn;
use viewcrop_core::config::ContainerConfig;
use viewcrop_core::geometry::Point;

use crate::app::ViewcropApp;

pub fn show(ctx: &egui::Context, app: &mut ViewcropApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        sync_container(app, rect.size());

        let Some(texture_id) = app.textures.picture.as_ref().map(|t| t.id()) else {
            show_placeholder(ui, "Open a picture to begin");
            return;
        };
        if !app.session.viewport().is_ready() {
            show_placeholder(ui, "Crop frame has no area");
            return;
        }

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        handle_pan(ui, &response, app, rect);

        let viewport = app.session.viewport();
        let frame = viewport.frame_size();
        let rendered = viewport.rendered_size();
        let offset = viewport.offset();

        let frame_rect =
            egui::Rect::from_center_size(rect.center(), egui::vec2(frame.width as f32, frame.height as f32));
        let img_rect = egui::Rect::from_center_size(
            frame_rect.center() + egui::vec2(offset.x as f32, offset.y as f32),
            egui::vec2(rendered.width as f32, rendered.height as f32),
        );

        let painter = ui.painter_at(rect);
        painter.image(
            texture_id,
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        draw_dim_regions(&painter, rect, frame_rect);
        draw_frame_border(&painter, frame_rect);
        draw_frame_label(&painter, frame_rect);

        if response.hovered() {
            ctx.set_cursor_icon(if app.ui_state.panning {
                egui::CursorIcon::Grabbing
            } else {
                egui::CursorIcon::Grab
            });
        }
    });
}

/// Percentage frame sizes resolve against the panel, so a resize is a
/// container change.
fn sync_container(app: &mut ViewcropApp, size: egui::Vec2) {
    let current = app.session.config().container;
    let (width, height) = (size.x.round() as f64, size.y.round() as f64);
    if current.width == width && current.height == height {
        return;
    }

    app.ui_state.panning = false;
    app.textures.preview = None;
    if let Err(e) = app.session.set_container(ContainerConfig { width, height }) {
        warn!("Container resize left no usable frame: {e}");
    }
}

fn to_point(pos: egui::Pos2, rect: egui::Rect) -> Point {
    Point::new((pos.x - rect.left()) as f64, (pos.y - rect.top()) as f64)
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut ViewcropApp, rect: egui::Rect) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = origin {
            app.session.pointer_down(to_point(pos, rect));
            app.ui_state.panning = true;
        }
    }

    if !app.ui_state.panning {
        return;
    }

    if response.drag_stopped() {
        app.session.pointer_up();
        app.ui_state.panning = false;
    } else if !response.contains_pointer() {
        app.session.pointer_leave();
        app.ui_state.panning = false;
    } else if let Some(pos) = response.interact_pointer_pos() {
        app.session.pointer_move(to_point(pos, rect));
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_dim_regions(painter: &egui::Painter, outer: egui::Rect, frame: egui::Rect) {
    let dim_color = egui::Color32::from_black_alpha(140);

    // Top
    painter.rect_filled(
        egui::Rect::from_min_max(outer.left_top(), egui::pos2(outer.right(), frame.top())),
        0.0,
        dim_color,
    );
    // Bottom
    painter.rect_filled(
        egui::Rect::from_min_max(egui::pos2(outer.left(), frame.bottom()), outer.right_bottom()),
        0.0,
        dim_color,
    );
    // Left (between top and bottom)
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(outer.left(), frame.top()),
            egui::pos2(frame.left(), frame.bottom()),
        ),
        0.0,
        dim_color,
    );
    // Right (between top and bottom)
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(frame.right(), frame.top()),
            egui::pos2(outer.right(), frame.bottom()),
        ),
        0.0,
        dim_color,
    );
}

fn draw_frame_border(painter: &egui::Painter, frame: egui::Rect) {
    painter.rect_stroke(
        frame,
        0.0,
        egui::Stroke::new(1.5, egui::Color32::from_rgb(255, 255, 0)),
        egui::epaint::StrokeKind::Outside,
    );
}

fn draw_frame_label(painter: &egui::Painter, frame: egui::Rect) {
    let label = format!("{}x{}", frame.width().round() as u32, frame.height().round() as u32);
    painter.text(
        egui::pos2(frame.right() - 4.0, frame.bottom() + 4.0),
        egui::Align2::RIGHT_TOP,
        label,
        egui::FontId::proportional(12.0),
        egui::Color32::from_rgb(255, 255, 0),
    );
}

fn show_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

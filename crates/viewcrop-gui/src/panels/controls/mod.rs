mod crop;
mod frame;
mod zoom;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::ViewcropApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                frame::frame_section(ui, app);
                ui.separator();
                zoom::zoom_section(ui, app);
                ui.separator();
                crop::crop_section(ui, ctx, app);
            });
        });
}

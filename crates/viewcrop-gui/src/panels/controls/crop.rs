use crate::app::ViewcropApp;

pub(super) fn crop_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut ViewcropApp) {
    crate::panels::section_header(ui, "Crop", None);
    ui.add_space(4.0);

    let loaded = app.session.picture().is_some();
    ui.horizontal(|ui| {
        if ui.add_enabled(loaded, egui::Button::new("Crop")).clicked() {
            app.extract_crop(ctx);
        }
        if ui.add_enabled(loaded, egui::Button::new("Reset")).clicked() {
            app.reset_session();
        }
    });

    if let Some(latest) = app.session.latest() {
        ui.add_space(4.0);
        ui.small(format!("Selection: {}", latest.cropped.rect));
    } else if loaded {
        ui.small("Drag the picture to position it in the frame");
    }
}

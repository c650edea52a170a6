use crate::app::ViewcropApp;

const PREVIEW_PANEL_WIDTH: f32 = 260.0;

/// Latest extracted crop, scaled to fit the panel.
pub fn show(ctx: &egui::Context, app: &mut ViewcropApp) {
    egui::SidePanel::right("preview")
        .default_width(PREVIEW_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            super::section_header(ui, "Preview", None);
            ui.add_space(4.0);

            let (Some(texture), Some(latest)) = (app.textures.preview.as_ref(), app.session.latest())
            else {
                ui.small("Press Crop to extract the framed region");
                return;
            };

            let size = texture.size_vec2();
            let available = ui.available_width();
            let scale = (available / size.x).min(1.0);
            ui.image((texture.id(), size * scale));

            ui.add_space(4.0);
            ui.small(format!("{}", latest.cropped.rect));
            ui.small(format!(
                "{} {:.1} KB",
                latest.encoded.format,
                latest.encoded.bytes.len() as f64 / 1024.0
            ));

            ui.add_space(4.0);
            if ui.button("Save Crop As...").clicked() {
                super::menu_bar::save_crop(app);
            }
        });
}

use crate::app::ViewcropApp;

pub(super) fn frame_section(ui: &mut egui::Ui, app: &mut ViewcropApp) {
    let status = app.frame_inputs.dirty.then_some("edited");
    crate::panels::section_header(ui, "Frame", status);
    ui.add_space(4.0);

    let inputs = &mut app.frame_inputs;
    let mut changed = false;
    egui::Grid::new("frame_inputs")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Width");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut inputs.width).hint_text("45%"))
                .changed();
            ui.end_row();

            ui.label("Height");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut inputs.height).hint_text("from aspect"))
                .changed();
            ui.end_row();

            ui.label("Aspect");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut inputs.aspect_ratio).hint_text("9 / 16"))
                .changed();
            ui.end_row();
        });
    if changed {
        inputs.dirty = true;
    }

    ui.add_space(4.0);
    if ui.button("Apply").clicked() {
        app.apply_frame_inputs();
    }

    if let Ok(size) = app.session.frame_size() {
        ui.small(format!("Resolved: {:.0}x{:.0}", size.width, size.height));
    }
}

use std::sync::mpsc;

use image::DynamicImage;
use viewcrop_core::config::SessionConfig;
use viewcrop_core::crop::CropOutcome;
use viewcrop_core::session::CropSession;

use crate::convert::picture_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{FrameInputs, TextureState, UIState};
use crate::workers;

pub struct ViewcropApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: CropSession,
    pub ui_state: UIState,
    pub frame_inputs: FrameInputs,
    pub textures: TextureState,
    pub show_about: bool,
}

impl ViewcropApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone());
        let config = SessionConfig::default();

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            frame_inputs: FrameInputs::from_config(&config.frame),
            session: CropSession::new(config),
            ui_state: UIState::default(),
            textures: TextureState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::PictureLoaded { path, picture } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        picture.width(),
                        picture.height()
                    ));
                    self.textures.picture = Some(load_texture(ctx, "picture", &picture));
                    self.textures.preview = None;
                    self.ui_state.file_path = Some(path);
                    if let Err(e) = self.session.load_picture(picture) {
                        self.ui_state.add_log(format!("ERROR: {e}"));
                    }
                }
                WorkerResult::CropSaved { path, bytes } => {
                    self.ui_state.add_log(format!(
                        "Saved: {} ({:.1} KB)",
                        path.display(),
                        bytes as f64 / 1024.0
                    ));
                }
                WorkerResult::ConfigImported { config } => {
                    self.frame_inputs = FrameInputs::from_config(&config.frame);
                    self.textures.preview = None;
                    match self.session.apply_config(config) {
                        Ok(()) => self.ui_state.add_log("Config imported".into()),
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Push the frame inputs into the session.
    pub fn apply_frame_inputs(&mut self) {
        self.frame_inputs.dirty = false;
        self.textures.preview = None;

        let result = self
            .frame_inputs
            .to_frame_config()
            .and_then(|frame| self.session.reconfigure(frame));
        match result {
            Ok(()) => {
                if let Ok(size) = self.session.frame_size() {
                    self.ui_state.add_log(format!(
                        "Frame set to {:.0}x{:.0}",
                        size.width, size.height
                    ));
                }
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Cut the framed region and show it in the preview panel.
    pub fn extract_crop(&mut self, ctx: &egui::Context) {
        match self.session.extract() {
            Ok(CropOutcome::Extracted(cropped)) => {
                self.ui_state.add_log(format!("Cropped {}", cropped.rect));
                self.textures.preview = Some(load_texture(ctx, "preview", &cropped.image));
            }
            Ok(CropOutcome::Deferred(reason)) => {
                self.ui_state.add_log(format!("Crop skipped: {reason}"));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn reset_session(&mut self) {
        self.textures.preview = None;
        match self.session.reset() {
            Ok(()) => self.ui_state.add_log("Viewport reset".into()),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

fn load_texture(ctx: &egui::Context, name: &str, picture: &DynamicImage) -> egui::TextureHandle {
    ctx.load_texture(
        name,
        picture_to_color_image(picture),
        egui::TextureOptions::LINEAR,
    )
}

impl eframe::App for ViewcropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::preview::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Viewcrop")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Viewcrop");
                        ui.label("Pan, zoom and crop through a fixed frame");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

use std::sync::mpsc;

use crate::messages::{WorkerCommand, WorkerResult};

use super::io;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    let spawned = std::thread::Builder::new()
        .name("viewcrop-worker".into())
        .spawn({
            let result_tx = result_tx.clone();
            let ctx = ctx.clone();
            move || worker_loop(cmd_rx, result_tx, ctx)
        });
    if let Err(e) = spawned {
        send_error(&result_tx, &ctx, format!("Failed to spawn worker thread: {e}"));
    }

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadPicture { path } => {
                io::handle_load_picture(&path, &tx, &ctx);
            }
            WorkerCommand::SaveCrop {
                path,
                result,
                quality,
            } => {
                io::handle_save_crop(&path, &result, quality, &tx, &ctx);
            }
        }
    }
}

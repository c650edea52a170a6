use std::borrow::Cow;
use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use viewcrop_core::config::OutputConfig;
use viewcrop_core::error::Result;
use viewcrop_core::io::image_io::{
    encode, format_from_path, load_picture, save_encoded, EncodedImage,
};
use viewcrop_core::session::CropResult;

use crate::messages::WorkerResult;

use super::{send, send_error, send_log};

pub(super) fn handle_load_picture(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match load_picture(path) {
        Ok(picture) => {
            send_log(
                tx,
                ctx,
                format!("Decoded in {:.0}ms", start.elapsed().as_secs_f64() * 1000.0),
            );
            send(
                tx,
                ctx,
                WorkerResult::PictureLoaded {
                    path: path.to_path_buf(),
                    picture,
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to open {}: {e}", path.display())),
    }
}

/// Bytes to write for `path`: the session's encoding when the extension
/// agrees with it, otherwise a fresh encoding in the requested format.
fn encoded_for_path<'a>(
    path: &Path,
    result: &'a CropResult,
    quality: u8,
) -> Result<Cow<'a, EncodedImage>> {
    let format = format_from_path(path, result.encoded.format);
    if format == result.encoded.format {
        return Ok(Cow::Borrowed(&result.encoded));
    }
    let output = OutputConfig { format, quality };
    Ok(Cow::Owned(encode(&result.cropped.image, &output)?))
}

pub(super) fn handle_save_crop(
    path: &Path,
    result: &CropResult,
    quality: u8,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let encoded = match encoded_for_path(path, result, quality) {
        Ok(encoded) => encoded,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to encode crop: {e}"));
            return;
        }
    };

    match save_encoded(&encoded, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::CropSaved {
                path: path.to_path_buf(),
                bytes: encoded.bytes.len(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}

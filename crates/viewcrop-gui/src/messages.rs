use std::path::PathBuf;

use image::DynamicImage;
use viewcrop_core::config::SessionConfig;
use viewcrop_core::session::CropResult;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode a picture from disk.
    LoadPicture { path: PathBuf },

    /// Write a crop to disk. The session's encoding is written as-is unless
    /// the file extension asks for another format.
    SaveCrop {
        path: PathBuf,
        result: CropResult,
        quality: u8,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    PictureLoaded {
        path: PathBuf,
        picture: DynamicImage,
    },
    CropSaved {
        path: PathBuf,
        bytes: usize,
    },
    ConfigImported {
        config: SessionConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}

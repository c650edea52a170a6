use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewcropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(String),

    #[error("Invalid transform: {0}")]
    InvalidTransform(String),

    #[error("Source image is not loaded yet")]
    ImageNotReady,

    #[error("Crop frame resolves to a degenerate size: {width}x{height}")]
    DegenerateFrame { width: f64, height: f64 },

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ViewcropError>;

use std::fmt;

use image::{DynamicImage, GenericImageView};
use tracing::{info, warn};

use crate::error::{Result, ViewcropError};
use crate::geometry::Size;
use crate::viewport::ViewportState;

/// A rectangle in image coordinates for cropping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Check the rect is non-empty and fits within the source dimensions.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<CropRect> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewcropError::InvalidCrop(
                "Crop width and height must be > 0".into(),
            ));
        }

        let fits_x = self.x.checked_add(self.width).is_some_and(|r| r <= src_w);
        let fits_y = self.y.checked_add(self.height).is_some_and(|b| b <= src_h);
        if !fits_x || !fits_y {
            return Err(ViewcropError::InvalidCrop(format!(
                "Crop region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(self.clone())
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}

/// Crop region in natural-resolution pixels, before rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SourceRect {
    /// Round to whole pixels, keeping the rect inside a `src_w` x `src_h`
    /// image.
    pub fn to_crop_rect(&self, src_w: u32, src_h: u32) -> CropRect {
        let width = (self.width.round() as u32).clamp(1, src_w.max(1));
        let height = (self.height.round() as u32).clamp(1, src_h.max(1));
        let x = (self.x.round().max(0.0) as u32).min(src_w.saturating_sub(width));
        let y = (self.y.round().max(0.0) as u32).min(src_h.saturating_sub(height));
        CropRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Why an extraction was not performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferReason {
    /// Natural dimensions of the picture are not known yet.
    ImageNotReady,
    /// The crop frame resolved to zero size.
    DegenerateFrame,
}

impl fmt::Display for DeferReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageNotReady => write!(f, "image not loaded"),
            Self::DegenerateFrame => write!(f, "crop frame has no area"),
        }
    }
}

/// The extracted region and where it came from.
#[derive(Clone, Debug)]
pub struct CroppedImage {
    pub source: SourceRect,
    pub rect: CropRect,
    pub image: DynamicImage,
}

#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum CropOutcome {
    Extracted(CroppedImage),
    Deferred(DeferReason),
}

impl CropOutcome {
    pub fn extracted(self) -> Option<CroppedImage> {
        match self {
            Self::Extracted(cropped) => Some(cropped),
            Self::Deferred(_) => None,
        }
    }
}

/// Maps the on-screen viewport onto the source picture's pixels.
///
/// Stateless: every call recomputes from the viewport it is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct CropExtractor;

impl CropExtractor {
    /// Region of a `natural`-sized picture that is visible through the frame.
    pub fn source_rect(
        viewport: &ViewportState,
        natural: Size,
    ) -> std::result::Result<SourceRect, DeferReason> {
        let frame = viewport.frame_size();
        if !frame.is_positive() {
            return Err(DeferReason::DegenerateFrame);
        }
        if !natural.is_positive() || !viewport.is_ready() {
            return Err(DeferReason::ImageNotReady);
        }

        let rendered = viewport.rendered_size();
        let offset = viewport.offset();
        let x_ratio = natural.width / rendered.width;
        let y_ratio = natural.height / rendered.height;

        let width = (frame.width * x_ratio).min(natural.width);
        let height = (frame.height * y_ratio).min(natural.height);
        let left = (rendered.width / 2.0 - frame.width / 2.0 - offset.x) * x_ratio;
        let top = (rendered.height / 2.0 - frame.height / 2.0 - offset.y) * y_ratio;

        Ok(SourceRect {
            x: left.clamp(0.0, natural.width - width),
            y: top.clamp(0.0, natural.height - height),
            width,
            height,
        })
    }

    /// Cut the visible region out of `picture`.
    pub fn extract(&self, picture: &DynamicImage, viewport: &ViewportState) -> Result<CropOutcome> {
        let (src_w, src_h) = picture.dimensions();
        let natural = Size::new(src_w as f64, src_h as f64);

        let source = match Self::source_rect(viewport, natural) {
            Ok(source) => source,
            Err(reason) => {
                warn!(%reason, "Crop extraction deferred");
                return Ok(CropOutcome::Deferred(reason));
            }
        };

        let rect = source.to_crop_rect(src_w, src_h).validated(src_w, src_h)?;
        let image = picture.crop_imm(rect.x, rect.y, rect.width, rect.height);
        info!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "Crop extracted"
        );

        Ok(CropOutcome::Extracted(CroppedImage {
            source,
            rect,
            image,
        }))
    }
}

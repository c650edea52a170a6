use image::DynamicImage;
use tracing::info;

use crate::config::{ContainerConfig, SessionConfig};
use crate::crop::{CropExtractor, CropOutcome, CroppedImage, DeferReason};
use crate::error::Result;
use crate::frame::FrameConfig;
use crate::geometry::{Offset, Point, Size};
use crate::io::image_io::{encode, EncodedImage};
use crate::pan::PanController;
use crate::viewport::ViewportState;
use crate::zoom::{ZoomController, ZoomUpdate};

/// Latest extraction, kept until the next one replaces it.
#[derive(Clone, Debug)]
pub struct CropResult {
    pub cropped: CroppedImage,
    pub encoded: EncodedImage,
}

/// One cropping session: a picture, the frame it is viewed through and the
/// controllers that move it.
///
/// The session is the only owner of the viewport; pan and zoom events are
/// routed through it so the controllers never hold shared references.
pub struct CropSession {
    config: SessionConfig,
    picture: Option<DynamicImage>,
    viewport: ViewportState,
    pan: PanController,
    zoom: ZoomController,
    extractor: CropExtractor,
    latest: Option<CropResult>,
}

impl CropSession {
    pub fn new(config: SessionConfig) -> Self {
        let zoom = ZoomController::new(config.zoom_track);
        Self {
            config,
            picture: None,
            viewport: ViewportState::default(),
            pan: PanController::new(),
            zoom,
            extractor: CropExtractor,
            latest: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn picture(&self) -> Option<&DynamicImage> {
        self.picture.as_ref()
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn pan(&self) -> &PanController {
        &self.pan
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn offset(&self) -> Offset {
        self.viewport.offset()
    }

    /// Resolved crop frame size for the current configuration.
    pub fn frame_size(&self) -> Result<Size> {
        self.config.frame_size()
    }

    /// Picture finished loading: replace the current one and start over.
    pub fn load_picture(&mut self, picture: DynamicImage) -> Result<()> {
        info!(
            width = picture.width(),
            height = picture.height(),
            "Picture loaded"
        );
        self.picture = Some(picture);
        self.reset()
    }

    /// Apply a new frame configuration and start over.
    pub fn reconfigure(&mut self, frame: FrameConfig) -> Result<()> {
        info!(width = %frame.width, aspect = %frame.aspect_ratio, "Frame reconfigured");
        self.config.frame = frame;
        self.reset()
    }

    /// Replace the whole configuration, e.g. after importing a file.
    pub fn apply_config(&mut self, config: SessionConfig) -> Result<()> {
        self.zoom.set_track(config.zoom_track);
        self.config = config;
        self.reset()
    }

    pub fn set_container(&mut self, container: ContainerConfig) -> Result<()> {
        self.config.container = container;
        self.reset()
    }

    /// Re-fit the picture to the frame, centred and unzoomed.
    ///
    /// Without a picture the viewport is simply cleared.
    pub fn reset(&mut self) -> Result<()> {
        self.pan.reset();
        self.zoom.reset();
        self.latest = None;
        self.viewport = ViewportState::default();

        let Some(picture) = self.picture.as_ref() else {
            return Ok(());
        };
        let frame = self.config.frame_size()?;
        let natural = Size::new(picture.width() as f64, picture.height() as f64);
        self.viewport.reset(natural, frame)
    }

    pub fn pointer_down(&mut self, point: Point) {
        self.pan.start(point, &self.viewport);
    }

    pub fn pointer_move(&mut self, point: Point) -> Option<Offset> {
        self.pan.drag(point, &mut self.viewport)
    }

    pub fn pointer_up(&mut self) {
        self.pan.end(&self.viewport);
    }

    pub fn pointer_leave(&mut self) {
        self.pan.end(&self.viewport);
    }

    pub fn zoom_press(&mut self, position: f64) -> ZoomUpdate {
        self.zoom.press(position, &mut self.viewport)
    }

    pub fn zoom_drag(&mut self, position: f64) -> Option<ZoomUpdate> {
        self.zoom.drag(position, &mut self.viewport)
    }

    pub fn zoom_release(&mut self) {
        self.zoom.release();
    }

    pub fn zoom_marker(&self) -> f64 {
        self.zoom.marker()
    }

    /// Drop the zoom, restoring the committed pan.
    pub fn reset_zoom(&mut self) {
        self.viewport.reset_scale();
        self.zoom.reset();
    }

    /// Extract the region under the frame and keep its encoding as the
    /// latest result. A deferred extraction leaves the previous result alone.
    pub fn extract(&mut self) -> Result<CropOutcome> {
        let Some(picture) = self.picture.as_ref() else {
            return Ok(CropOutcome::Deferred(DeferReason::ImageNotReady));
        };

        let outcome = self.extractor.extract(picture, &self.viewport)?;
        if let CropOutcome::Extracted(ref cropped) = outcome {
            let encoded = encode(&cropped.image, &self.config.output)?;
            self.latest = Some(CropResult {
                cropped: cropped.clone(),
                encoded,
            });
        }
        Ok(outcome)
    }

    pub fn latest(&self) -> Option<&CropResult> {
        self.latest.as_ref()
    }

    /// Hand the latest result to an exporter.
    pub fn take_latest(&mut self) -> Option<CropResult> {
        self.latest.take()
    }
}

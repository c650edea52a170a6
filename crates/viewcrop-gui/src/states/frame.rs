use viewcrop_core::error::Result;
use viewcrop_core::frame::FrameConfig;

/// Text inputs for the crop frame, applied on demand.
pub struct FrameInputs {
    pub width: String,
    pub height: String,
    pub aspect_ratio: String,
    /// Inputs edited since the last apply.
    pub dirty: bool,
}

impl FrameInputs {
    pub fn from_config(frame: &FrameConfig) -> Self {
        Self {
            width: frame.width.to_string(),
            height: frame.height.map(|h| h.to_string()).unwrap_or_default(),
            aspect_ratio: frame.aspect_ratio.to_string(),
            dirty: false,
        }
    }

    pub fn to_frame_config(&self) -> Result<FrameConfig> {
        FrameConfig::from_strs(&self.width, Some(&self.height), &self.aspect_ratio)
    }
}

impl Default for FrameInputs {
    fn default() -> Self {
        Self::from_config(&FrameConfig::default())
    }
}

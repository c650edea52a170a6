use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use viewcrop_core::config::{ContainerConfig, SessionConfig};
use viewcrop_core::frame::{AspectRatio, Dimension};

/// Frame options shared by the commands that set up a session.
#[derive(Args)]
pub struct FrameArgs {
    /// Session config file (TOML); the options below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frame width, e.g. "45%" or "300px"
    #[arg(long)]
    pub frame_width: Option<Dimension>,

    /// Frame height; derived from the aspect ratio when omitted
    #[arg(long)]
    pub frame_height: Option<Dimension>,

    /// Frame aspect ratio, e.g. "9 / 16" or "16:9"
    #[arg(long)]
    pub aspect_ratio: Option<AspectRatio>,

    /// Container size that percentages resolve against, as WxH
    #[arg(long, value_parser = parse_container)]
    pub container: Option<ContainerConfig>,
}

impl FrameArgs {
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match self.config {
            Some(ref path) => SessionConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if let Some(width) = self.frame_width {
            config.frame.width = width;
        }
        if self.frame_height.is_some() {
            config.frame.height = self.frame_height;
        }
        if let Some(aspect) = self.aspect_ratio {
            config.frame.aspect_ratio = aspect;
        }
        if let Some(container) = self.container {
            config.container = container;
        }
        Ok(config)
    }
}

fn parse_container(s: &str) -> std::result::Result<ContainerConfig, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let width: f64 = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
    let height: f64 = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
    if !(width > 0.0 && height > 0.0) {
        return Err(format!("container must be positive, got '{s}'"));
    }
    Ok(ContainerConfig { width, height })
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewcropError};
use crate::geometry::Size;

/// A frame dimension, either absolute or relative to the container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dimension {
    Pixels(f64),
    Percent(f64),
}

impl Dimension {
    /// Resolve against the container extent on the same axis.
    pub fn resolve(&self, container: f64) -> f64 {
        match self {
            Self::Pixels(px) => *px,
            Self::Percent(pct) => container * pct / 100.0,
        }
    }
}

impl FromStr for Dimension {
    type Err = ViewcropError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (number, percent) = if let Some(n) = trimmed.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = trimmed.strip_suffix("px") {
            (n, false)
        } else {
            (trimmed, false)
        };

        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| ViewcropError::InvalidDimension(s.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ViewcropError::InvalidDimension(s.to_string()));
        }

        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Pixels(value)
        })
    }
}

impl TryFrom<String> for Dimension {
    type Error = ViewcropError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Dimension> for String {
    fn from(value: Dimension) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Width-to-height ratio, kept as the two terms it was written with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ViewcropError::InvalidAspectRatio(format!("{width} / {height}")));
        }
        Ok(Self { width, height })
    }

    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl FromStr for AspectRatio {
    type Err = ViewcropError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ViewcropError::InvalidAspectRatio(s.to_string());
        let parse = |part: &str| part.trim().parse::<f64>().map_err(|_| invalid());

        match s.split_once(['/', ':']) {
            Some((w, h)) => Self::new(parse(w)?, parse(h)?).map_err(|_| invalid()),
            None => Self::new(parse(s)?, 1.0).map_err(|_| invalid()),
        }
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ViewcropError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.width, self.height)
    }
}

/// Crop frame configuration. The height is derived from the aspect ratio
/// when not given explicitly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    pub width: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    pub aspect_ratio: AspectRatio,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: Dimension::Percent(45.0),
            height: None,
            aspect_ratio: AspectRatio {
                width: 9.0,
                height: 16.0,
            },
        }
    }
}

impl FrameConfig {
    /// Build a config from the textual options a user typed in.
    pub fn from_strs(width: &str, height: Option<&str>, aspect_ratio: &str) -> Result<Self> {
        Ok(Self {
            width: width.parse()?,
            height: height
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::parse::<Dimension>)
                .transpose()?,
            aspect_ratio: aspect_ratio.parse()?,
        })
    }

    /// Resolve the frame's display size inside `container`.
    pub fn resolve(&self, container: Size) -> Result<Size> {
        let width = self.width.resolve(container.width);
        let height = match self.height {
            Some(h) => h.resolve(container.height),
            None => width / self.aspect_ratio.ratio(),
        };

        let size = Size::new(width, height);
        if !size.is_positive() {
            return Err(ViewcropError::DegenerateFrame { width, height });
        }
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_ASPECT_RATIO, DEFAULT_FRAME_WIDTH};

    #[test]
    fn test_default_matches_consts() {
        let config = FrameConfig::default();
        assert_eq!(config.width, DEFAULT_FRAME_WIDTH.parse::<Dimension>().unwrap());
        assert_eq!(config.aspect_ratio, DEFAULT_ASPECT_RATIO.parse::<AspectRatio>().unwrap());
    }
}

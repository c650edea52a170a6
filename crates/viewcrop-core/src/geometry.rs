use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewcropError};

/// A point in the local coordinate space of a pointer target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Translation of the picture relative to the centre of the crop frame,
/// in display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Render the offset as the transform applied at the drawing surface.
    pub fn to_css_transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, factor: f64) -> Offset {
        Offset::new(self.x * factor, self.y * factor)
    }
}

/// Width and height in display units or pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn scaled(&self, factor: f64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }
}

/// Parse the translation of a serialized transform.
///
/// `None`, an empty string and `none` mean no transform has been applied and
/// yield `(0, 0)`. Accepts `translate(x, y)` and `translate3d(x, y, z)` with
/// optional `px` units.
pub fn parse_offset(transform: Option<&str>) -> Result<Offset> {
    let raw = match transform.map(str::trim) {
        None | Some("") | Some("none") => return Ok(Offset::ZERO),
        Some(s) => s,
    };

    let args = raw
        .strip_prefix("translate3d(")
        .or_else(|| raw.strip_prefix("translate("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ViewcropError::InvalidTransform(raw.to_string()))?;

    let values = args
        .split(',')
        .map(|part| parse_length(part.trim()))
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| ViewcropError::InvalidTransform(raw.to_string()))?;

    match values.as_slice() {
        [x] => Ok(Offset::new(*x, 0.0)),
        [x, y] | [x, y, _] => Ok(Offset::new(*x, *y)),
        _ => Err(ViewcropError::InvalidTransform(raw.to_string())),
    }
}

fn parse_length(s: &str) -> Option<f64> {
    let number = s.strip_suffix("px").unwrap_or(s).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Maximum distance the picture may travel from centre on one axis.
///
/// Zero when the rendered picture does not exceed the frame on that axis.
pub fn axis_limit(rendered: f64, frame: f64) -> f64 {
    let limit = (rendered - frame) / 2.0;
    if limit.is_finite() {
        limit.max(0.0)
    } else {
        0.0
    }
}

/// Clamp `value` to `[-limit, limit]`, keeping its sign.
pub fn clamp_axis(value: f64, limit: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    if value.abs() >= limit {
        if value < 0.0 {
            -limit
        } else {
            limit
        }
    } else {
        value
    }
}

/// Clamp both axes of `offset` so a picture of `rendered` size keeps
/// covering a frame of `frame` size.
pub fn clamp_offset(offset: Offset, rendered: Size, frame: Size) -> Offset {
    Offset::new(
        clamp_axis(offset.x, axis_limit(rendered.width, frame.width)),
        clamp_axis(offset.y, axis_limit(rendered.height, frame.height)),
    )
}

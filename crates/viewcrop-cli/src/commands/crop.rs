use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use tracing::warn;
use viewcrop_core::config::OutputFormat;
use viewcrop_core::crop::CropOutcome;
use viewcrop_core::geometry::Point;
use viewcrop_core::io::image_io::{format_from_path, load_picture, save_encoded};
use viewcrop_core::session::CropSession;
use viewcrop_core::zoom::ZoomUpdate;

use super::frame::FrameArgs;
use crate::summary::print_crop_summary;

#[derive(Clone, ValueEnum)]
pub enum FormatArg {
    Jpeg,
    Png,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jpeg => OutputFormat::Jpeg,
            FormatArg::Png => OutputFormat::Png,
        }
    }
}

/// One recorded interaction, replayed in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Drag the picture by `(dx, dy)` display units.
    Pan { dx: f64, dy: f64 },
    /// Set the zoom control to `percent` of its track.
    Zoom { percent: f64 },
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| format!("expected pan:DX,DY or zoom:PCT, got '{s}'"))?;
        let number = |v: &str| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| format!("bad number '{v}' in '{s}'"))
        };

        match kind.trim() {
            "pan" => {
                let (dx, dy) = value
                    .split_once(',')
                    .ok_or_else(|| format!("pan needs DX,DY, got '{value}'"))?;
                Ok(Step::Pan {
                    dx: number(dx)?,
                    dy: number(dy)?,
                })
            }
            "zoom" => Ok(Step::Zoom {
                percent: number(value)?,
            }),
            other => Err(format!("unknown step '{other}'")),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Pan { dx, dy } => write!(f, "pan {dx},{dy}"),
            Step::Zoom { percent } => write!(f, "zoom {percent}%"),
        }
    }
}

#[derive(Args)]
pub struct CropArgs {
    /// Input picture
    pub file: PathBuf,

    /// Output file (auto-generated if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Interaction to replay: "pan:DX,DY" or "zoom:PCT". Repeatable.
    #[arg(long = "step")]
    pub steps: Vec<Step>,

    /// Output format (defaults to the output extension, then the config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// JPEG quality (1-100)
    #[arg(long)]
    pub quality: Option<u8>,

    #[command(flatten)]
    pub frame: FrameArgs,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let mut config = args.frame.session_config()?;
    if let Some(quality) = args.quality {
        config.output.quality = quality.clamp(1, 100);
    }
    config.output.format = match (&args.format, &args.output) {
        (Some(format), _) => format.clone().into(),
        (None, Some(path)) => format_from_path(path, config.output.format),
        (None, None) => config.output.format,
    };

    let picture = load_picture(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let mut session = CropSession::new(config);
    session.load_picture(picture)?;

    for step in &args.steps {
        apply_step(&mut session, *step);
    }

    let cropped = match session.extract()? {
        CropOutcome::Extracted(cropped) => cropped,
        CropOutcome::Deferred(reason) => bail!("Crop not possible: {reason}"),
    };
    let Some(result) = session.take_latest() else {
        bail!("Crop produced no output");
    };

    let output_path = args.output.clone().unwrap_or_else(|| {
        auto_crop_output_path(
            &args.file,
            cropped.rect.width,
            cropped.rect.height,
            result.encoded.format,
        )
    });
    save_encoded(&result.encoded, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    print_crop_summary(
        &args.file,
        &output_path,
        session.viewport(),
        &args.steps,
        &result,
    );
    Ok(())
}

fn apply_step(session: &mut CropSession, step: Step) {
    match step {
        Step::Pan { dx, dy } => {
            session.pointer_down(Point::new(0.0, 0.0));
            session.pointer_move(Point::new(dx, dy));
            session.pointer_up();
        }
        Step::Zoom { percent } => {
            let extent = session.zoom().track().extent;
            if session.zoom_press(percent * extent / 100.0) == ZoomUpdate::MarkerOnly {
                warn!(percent, "Zoom outside (0, 100) ignored");
            }
            session.zoom_release();
        }
    }
}

fn auto_crop_output_path(source: &Path, w: u32, h: u32, format: OutputFormat) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_crop{w}x{h}.{}", format.extension()))
}

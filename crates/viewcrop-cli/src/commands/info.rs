use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use viewcrop_core::geometry::{axis_limit, Size};
use viewcrop_core::io::image_io::load_picture;
use viewcrop_core::viewport::cover_fit;

use super::frame::FrameArgs;

#[derive(Args)]
pub struct InfoArgs {
    /// Input picture
    pub file: PathBuf,

    #[command(flatten)]
    pub frame: FrameArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let picture = load_picture(&args.file)?;
    let config = args.frame.session_config()?;
    let natural = Size::new(picture.width() as f64, picture.height() as f64);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", picture.width(), picture.height());
    println!("Color:       {:?}", picture.color());
    println!(
        "Container:   {}x{}",
        config.container.width, config.container.height
    );

    let frame = config.frame_size()?;
    let fitted = cover_fit(natural, frame);
    println!(
        "Frame:       {:.1}x{:.1} ({} wide, aspect {})",
        frame.width, frame.height, config.frame.width, config.frame.aspect_ratio
    );
    println!("Fitted:      {:.1}x{:.1}", fitted.width, fitted.height);
    println!(
        "Pan limits:  \u{00b1}{:.1} x \u{00b1}{:.1}",
        axis_limit(fitted.width, frame.width),
        axis_limit(fitted.height, frame.height)
    );

    Ok(())
}

use std::path::Path;

use console::Style;
use viewcrop_core::session::CropResult;
use viewcrop_core::viewport::ViewportState;

use crate::commands::crop::Step;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_crop_summary(
    input: &Path,
    output: &Path,
    viewport: &ViewportState,
    steps: &[Step],
    result: &CropResult,
) {
    let s = Styles::new();
    let frame = viewport.frame_size();
    let rendered = viewport.rendered_size();
    let offset = viewport.offset();

    println!();
    println!("  {}", s.title.apply_to("Viewcrop"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Viewport"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Frame"),
        s.value
            .apply_to(format!("{:.1}x{:.1}", frame.width, frame.height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Rendered"),
        s.value
            .apply_to(format!("{:.1}x{:.1}", rendered.width, rendered.height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.0}%", viewport.zoom_percent()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(offset.to_css_transform())
    );
    println!();

    if steps.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Steps"),
            s.disabled.apply_to("none")
        );
    } else {
        println!("  {}", s.header.apply_to("Steps"));
        for (i, step) in steps.iter().enumerate() {
            println!("    {}. {}", s.label.apply_to(i + 1), s.value.apply_to(step));
        }
    }
    println!();

    println!("  {}", s.header.apply_to("Crop"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Region"),
        s.value.apply_to(&result.cropped.rect)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Encoded"),
        s.value.apply_to(format!(
            "{} {:.1} KB",
            result.encoded.format,
            result.encoded.bytes.len() as f64 / 1024.0
        ))
    );
    println!();
}

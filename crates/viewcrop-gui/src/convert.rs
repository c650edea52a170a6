use image::DynamicImage;

/// Convert a decoded picture to an egui ColorImage (RGBA, unmultiplied).
pub fn picture_to_color_image(picture: &DynamicImage) -> egui::ColorImage {
    let rgba = picture.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

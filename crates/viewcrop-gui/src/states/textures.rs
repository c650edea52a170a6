/// GPU textures for the picture and the latest crop.
#[derive(Default)]
pub struct TextureState {
    pub picture: Option<egui::TextureHandle>,
    pub preview: Option<egui::TextureHandle>,
}

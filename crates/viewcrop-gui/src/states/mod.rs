mod frame;
mod textures;
mod ui;

pub use frame::FrameInputs;
pub use textures::TextureState;
pub use ui::UIState;

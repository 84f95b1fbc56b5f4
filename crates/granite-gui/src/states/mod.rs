mod textures;
mod ui;
mod viewer;

pub use textures::TextureCache;
pub use ui::UIState;
pub use viewer::ViewerState;

mod component;
mod render;
mod state;
mod types;

pub use component::SchemaCanvas;
pub use types::CanvasConfig;

mod dnd;
pub mod palette;
pub mod properties;
pub mod schema_canvas;

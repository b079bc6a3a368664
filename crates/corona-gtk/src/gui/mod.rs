pub mod app;
pub mod resources;
pub mod theme;
pub mod view;

pub use resources::{HexColor, Resources};

pub mod loader;
pub mod point;
pub mod raster;
pub mod renderer;
pub mod segment;
pub mod style;
pub mod utils;

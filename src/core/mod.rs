pub mod color;
pub mod error;
pub mod file_io;
pub mod grid_layout;
pub mod image_utils;
pub mod normalize;
pub mod palette;
pub mod stopwatch;

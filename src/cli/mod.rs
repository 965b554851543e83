pub mod args;
pub mod normalize;
pub mod preview;

pub mod charts;
pub mod cli;
pub mod core;

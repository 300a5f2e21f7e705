pub mod generator;
pub mod ranges;
pub mod render;

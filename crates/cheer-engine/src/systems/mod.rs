pub mod render;
pub mod rng;
pub mod text;

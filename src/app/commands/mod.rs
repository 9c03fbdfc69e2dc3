pub mod discover;
pub mod fill;
pub mod generate;
pub mod render;

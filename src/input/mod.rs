//! Input handling: reading job descriptions and resumes from files or inline text

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::{InputManager, InputSource};

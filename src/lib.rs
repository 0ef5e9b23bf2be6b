pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod scene;

pub use error::{CurvelisError, Result};

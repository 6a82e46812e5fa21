//! Vector type and small geometric helpers for segments and lines.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{vec2, Vector2};

//! Core module has the shared vector math and numeric traits.
pub mod math;
pub mod traits;

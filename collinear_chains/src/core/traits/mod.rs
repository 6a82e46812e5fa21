//! Numeric traits shared by every module of collinear_chains.
mod fuzzy_eq;
mod real;

pub use fuzzy_eq::FuzzyEq;
pub use real::Real;

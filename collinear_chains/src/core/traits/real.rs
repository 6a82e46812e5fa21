use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number coordinate type (`f32` or `f64`).
///
/// `IndexableNum` lets polygon edges be stored in a
/// [StaticAABB2DIndex](static_aabb2d_index::StaticAABB2DIndex) of the same numeric type.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + Send
    + Sync
    + 'static
{
    /// Exact conversion to `f64`.
    fn widen(self) -> f64;

    /// Nearest value to `v` (saturating to infinity outside the range of `Self`).
    fn narrow(v: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v as f32
    }
}

impl Real for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v
    }
}

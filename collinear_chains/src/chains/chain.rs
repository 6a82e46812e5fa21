use crate::core::{math::Vector2, traits::Real};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of points forming one open path.
///
/// Chains returned by the stitcher are maximal runs of consecutive collinear overlaps of a polyline
/// with polygon edges. The first and last points are the chain's extension ends. Once returned to
/// the caller a chain is never modified by this crate again.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chain<T = f64> {
    points: Vec<Vector2<T>>,
}

impl<T> Chain<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    #[inline]
    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Vector2<T>> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Vector2<T>> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vector2<T>> {
        self.points.last().copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<T>> {
        self.points.iter()
    }

    /// Total length of the chain's segments.
    pub fn path_length(&self) -> T {
        self.points
            .windows(2)
            .fold(T::zero(), |acc, w| acc + w[0].distance_to(w[1]))
    }

    /// Convert every point to another real type, see [Vector2::cast].
    pub fn cast<U>(&self) -> Option<Chain<U>>
    where
        U: Real,
    {
        let points = self
            .points
            .iter()
            .map(|p| p.cast())
            .collect::<Option<Vec<_>>>()?;
        Some(Chain { points })
    }

    /// Round every point of a double precision chain to `T`, see [Vector2::narrow].
    pub fn narrow(chain: Chain<f64>) -> Self {
        Chain {
            points: chain.points.into_iter().map(Vector2::narrow).collect(),
        }
    }
}

impl<T> Index<usize> for Chain<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a Vector2<T>;
    type IntoIter = std::slice::Iter<'a, Vector2<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> From<Vec<Vector2<T>>> for Chain<T> {
    fn from(points: Vec<Vector2<T>>) -> Self {
        Chain { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn accessors() {
        let chain = Chain::from_points(vec![vec2(0.0, 0.0), vec2(3.0, 0.0), vec2(3.0, 4.0)]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.first(), Some(vec2(0.0, 0.0)));
        assert_eq!(chain.last(), Some(vec2(3.0, 4.0)));
        assert_eq!(chain[1], vec2(3.0, 0.0));
        assert_eq!(chain.path_length(), 7.0);
        assert_eq!(chain.iter().count(), 3);

        let empty = Chain::<f64>::new();
        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
        assert_eq!(empty.path_length(), 0.0);
    }
}

//! Collinear overlap between a polyline segment and a polygon edge.
use crate::core::{
    math::{perp_dist_to_line, point_along_line, Vector2},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sub-segment of a polyline segment lying along a polygon edge.
///
/// Both points lie on the polygon edge. `start` is the endpoint closer to the start point of the
/// polyline segment that produced the interval.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlapInterval<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
}

impl<T> OverlapInterval<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        Self { start, end }
    }

    /// Length of the overlap.
    #[inline]
    pub fn length(&self) -> T {
        self.start.distance_to(self.end)
    }
}

/// Finds the collinear overlap of the segment `a->b` (polyline segment) with the segment `c->d`
/// (polygon edge).
///
/// Returns `None` when:
/// * either segment has zero length
/// * `a` or `b` is farther than `epsilon` from the infinite line through `c` and `d`
/// * the projection of `a->b` onto `c->d` shares at most a single point with `c->d`
///
/// The tolerance is one sided, it measures how far the polyline segment strays from the polygon
/// edge's line, never the reverse. Distance checks are inclusive (`<= epsilon`), so an `epsilon`
/// of zero requires exact line membership.
///
/// The returned endpoints are reconstructed on `c->d` and ordered so `start` is the one closer to
/// `a`. If `a` is exactly equidistant to both endpoints they keep the order of `c->d`.
///
/// # Examples
///
/// ```
/// # use collinear_chains::core::math::*;
/// # use collinear_chains::*;
/// // polyline segment running right to left over part of the edge
/// let r = seg_overlap(vec2(8.0, 0.0), vec2(2.0, 0.0), vec2(0.0, 0.0), vec2(5.0, 0.0), 0.0);
/// let interval = r.unwrap();
/// assert_eq!(interval.start, vec2(5.0, 0.0));
/// assert_eq!(interval.end, vec2(2.0, 0.0));
///
/// // segments touching end to end do not overlap
/// let r = seg_overlap(vec2(5.0, 0.0), vec2(9.0, 0.0), vec2(0.0, 0.0), vec2(5.0, 0.0), 0.0);
/// assert!(r.is_none());
/// ```
pub fn seg_overlap<T>(
    a: Vector2<T>,
    b: Vector2<T>,
    c: Vector2<T>,
    d: Vector2<T>,
    epsilon: T,
) -> Option<OverlapInterval<T>>
where
    T: Real,
{
    if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite()) {
        return None;
    }

    let cd = d - c;
    let len_cd = cd.length();
    if (b - a).length() == T::zero() || len_cd == T::zero() {
        return None;
    }

    if perp_dist_to_line(a, c, d) > epsilon || perp_dist_to_line(b, c, d) > epsilon {
        return None;
    }

    // positions along c->d with c at 0 and d at len_cd
    let dir = cd.scale(T::one() / len_cd);
    let mut sa = (a - c).dot(dir);
    let mut sb = (b - c).dot(dir);
    if sa > sb {
        std::mem::swap(&mut sa, &mut sb);
    }

    let lo = num_traits::real::Real::max(T::zero(), sa);
    let hi = num_traits::real::Real::min(len_cd, sb);
    if hi <= lo {
        return None;
    }

    let mut start = point_along_line(c, dir, lo);
    let mut end = point_along_line(c, dir, hi);
    if a.distance_to(end) < a.distance_to(start) {
        std::mem::swap(&mut start, &mut end);
    }

    Some(OverlapInterval::new(start, end))
}

use super::Vector2;
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use collinear_chains::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Squared distance between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Returns the point on the line through `p0` and `p1` at distance `s` from `p0` (towards `p1`).
///
/// `unit_dir` must be the normalized direction `p1 - p0`.
#[inline]
pub fn point_along_line<T>(p0: Vector2<T>, unit_dir: Vector2<T>, s: T) -> Vector2<T>
where
    T: Real,
{
    p0 + unit_dir.scale(s)
}

/// Perpendicular (unsigned) distance from `point` to the infinite line through `p0` and `p1`.
///
/// Computed as the magnitude of the perpendicular dot product divided by the line direction
/// length. The line must not be degenerate (`p0 != p1`), otherwise the result is NaN.
///
/// # Examples
///
/// ```
/// # use collinear_chains::core::math::*;
/// let d = perp_dist_to_line(vec2(5.0, 3.0), vec2(0.0, 0.0), vec2(10.0, 0.0));
/// assert_eq!(d, 3.0);
/// // point beyond the segment end still measures against the infinite line
/// let d = perp_dist_to_line(vec2(20.0, -1.0), vec2(0.0, 0.0), vec2(10.0, 0.0));
/// assert_eq!(d, 1.0);
/// ```
#[inline]
pub fn perp_dist_to_line<T>(point: Vector2<T>, p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let dir = p1 - p0;
    (point - p0).perp_dot(dir).abs() / dir.length()
}

/// Axis aligned bounding box of the line segment `p0` to `p1`.
#[inline]
pub fn seg_bounding_box<T>(p0: Vector2<T>, p1: Vector2<T>) -> AABB<T>
where
    T: Real,
{
    let (min_x, max_x) = min_max(p0.x, p1.x);
    let (min_y, max_y) = min_max(p0.y, p1.y);
    AABB::new(min_x, min_y, max_x, max_y)
}

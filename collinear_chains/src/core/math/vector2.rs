use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point/vector. Equality through `==` is exact, tolerance based comparisons are explicit.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`), also known
    /// as the 2D cross product.
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collinear_chains::core::math::*;
    /// assert_eq!(vec2(0.0, 0.0).distance_to(vec2(3.0, 4.0)), 5.0);
    /// ```
    pub fn distance_to(&self, other: Self) -> T {
        (other - self).length()
    }

    /// Returns `true` if `other` is at most `epsilon` away from `self` (inclusive).
    ///
    /// With `epsilon` equal to zero this is exact equality.
    #[inline]
    pub fn within_dist(&self, other: Self, epsilon: T) -> bool {
        self.distance_to(other) <= epsilon
    }

    /// Returns `true` if neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.widen().is_finite() && self.y.widen().is_finite()
    }

    /// Normalize the vector (length = 1).
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Convert the components to another real type, e.g. `f32` host coordinates to `f64`.
    ///
    /// Returns `None` if a component cannot be represented in `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collinear_chains::core::math::*;
    /// let host = Vector2::<f32>::new(1.5, -2.0);
    /// let v: Vector2<f64> = host.cast().unwrap();
    /// assert_eq!(v, vec2(1.5, -2.0));
    /// ```
    pub fn cast<U>(&self) -> Option<Vector2<U>>
    where
        U: Real,
    {
        Some(Vector2::new(U::from(self.x)?, U::from(self.y)?))
    }

    /// Exact conversion to double precision, see [Real::widen].
    #[inline]
    pub fn widen(&self) -> Vector2<f64> {
        Vector2::new(self.x.widen(), self.y.widen())
    }

    /// Round a double precision vector to the nearest representable `T`, see [Real::narrow].
    #[inline]
    pub fn narrow(v: Vector2<f64>) -> Self {
        Vector2::new(T::narrow(v.x), T::narrow(v.y))
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Real> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Vector2::new(x, y)
    }
}

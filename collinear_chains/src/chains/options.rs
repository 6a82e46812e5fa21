use crate::{core::traits::Real, validation::InputError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold options parameters when extracting collinear chains.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChainOptions<T>
where
    T: Real,
{
    /// Maximum perpendicular distance of a polyline point from a polygon edge's line for the
    /// segment to count as running along that edge. Also the maximum distance between an interval
    /// endpoint and a chain end for the interval to extend the chain. Zero requires exact
    /// collinearity and exact endpoint matches.
    pub epsilon: T,
}

impl<T> ChainOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self { epsilon: T::zero() }
    }

    #[inline]
    pub fn with_epsilon(epsilon: T) -> Self {
        Self { epsilon }
    }

    /// Returns an error if `epsilon` is negative, infinite or NaN.
    pub fn validate(&self) -> Result<(), InputError> {
        // NaN fails both comparisons
        let eps = self.epsilon;
        if eps >= T::zero() && eps <= <T as num_traits::Bounded>::max_value() {
            return Ok(());
        }

        Err(InputError::InvalidEpsilon {
            epsilon: num_traits::ToPrimitive::to_f64(&self.epsilon).unwrap_or(f64::NAN),
        })
    }
}

impl<T> Default for ChainOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

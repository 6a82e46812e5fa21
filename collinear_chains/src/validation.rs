//! Sanity checks on caller supplied point lists.
use crate::core::{math::Vector2, traits::Real};
use std::fmt;
use thiserror::Error;

/// Which input a point list was supplied as.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PathKind {
    Polyline,
    Polygon,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Polyline => f.write_str("polyline"),
            PathKind::Polygon => f.write_str("polygon"),
        }
    }
}

/// Invalid caller input. These point at data preparation bugs upstream, the operation that
/// detected them is aborted and nothing is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Point at `index` has a NaN or infinite coordinate.
    #[error("non-finite coordinate in {kind} at index {index}")]
    NonFinitePoint { kind: PathKind, index: usize },
    /// Points at `index` and `index + 1` are identical.
    #[error("identical consecutive points in {kind} at index {index}")]
    DuplicateConsecutivePoints { kind: PathKind, index: usize },
    /// The path repeats its first point at the end (polygons close implicitly, polylines must be
    /// open).
    #[error("first and last points in {kind} are identical")]
    FirstLastIdentical { kind: PathKind },
    /// Epsilon must be finite and not negative.
    #[error("epsilon must be finite and non-negative, got {epsilon}")]
    InvalidEpsilon { epsilon: f64 },
    /// A polyline of a batch failed validation.
    #[error("polyline {position} of batch: {source}")]
    InBatch {
        position: usize,
        #[source]
        source: Box<InputError>,
    },
}

impl InputError {
    /// Position in the batch of the offending polyline, if the error came from a batch call.
    pub fn batch_position(&self) -> Option<usize> {
        match self {
            InputError::InBatch { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub(crate) fn in_batch(self, position: usize) -> Self {
        InputError::InBatch {
            position,
            source: Box::new(self),
        }
    }
}

/// Check that every coordinate of `points` is finite, that no two consecutive points are
/// identical, and, for more than 2 points, that the first and last points differ.
///
/// Checks run in that order. Comparisons are exact. Empty and single point inputs always pass.
///
/// # Examples
///
/// ```
/// # use collinear_chains::core::math::*;
/// # use collinear_chains::*;
/// let pts = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 0.0)];
/// assert_eq!(
///     validate_points(&pts, PathKind::Polyline),
///     Err(InputError::DuplicateConsecutivePoints { kind: PathKind::Polyline, index: 1 })
/// );
/// ```
pub fn validate_points<T>(points: &[Vector2<T>], kind: PathKind) -> Result<(), InputError>
where
    T: Real,
{
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(InputError::NonFinitePoint { kind, index });
    }

    if let Some(index) = points.windows(2).position(|w| w[0] == w[1]) {
        return Err(InputError::DuplicateConsecutivePoints { kind, index });
    }

    if points.len() > 2 && points[0] == points[points.len() - 1] {
        return Err(InputError::FirstLastIdentical { kind });
    }

    Ok(())
}

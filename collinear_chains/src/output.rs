//! Result shapes handed to a host layer.
use crate::{chains::Chain, core::traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminant of a [ChainsOutput], stable across the FFI boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OutputKind {
    Empty = 0,
    Flat = 1,
    PerPolyline = 2,
    PerPolygon = 3,
}

/// Chains (or open paths) returned to a caller, tagged with how they are grouped.
///
/// * `Flat`: one list, e.g. the chains of a single polyline or the fragments of a difference.
/// * `PerPolyline`: one list per input polyline, parallel to the input.
/// * `PerPolygon`: one list per input polygon, parallel to the input.
///
/// The constructors map an empty outer list to `Empty`; inner lists of grouped outputs are kept
/// even when empty so positions stay aligned with the input.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "kind", content = "chains"))]
#[derive(Debug, Clone, PartialEq)]
pub enum ChainsOutput<T = f64> {
    Empty,
    Flat(Vec<Chain<T>>),
    PerPolyline(Vec<Vec<Chain<T>>>),
    PerPolygon(Vec<Vec<Chain<T>>>),
}

impl<T> ChainsOutput<T>
where
    T: Real,
{
    pub fn flat(chains: Vec<Chain<T>>) -> Self {
        if chains.is_empty() {
            ChainsOutput::Empty
        } else {
            ChainsOutput::Flat(chains)
        }
    }

    pub fn per_polyline(groups: Vec<Vec<Chain<T>>>) -> Self {
        if groups.is_empty() {
            ChainsOutput::Empty
        } else {
            ChainsOutput::PerPolyline(groups)
        }
    }

    pub fn per_polygon(groups: Vec<Vec<Chain<T>>>) -> Self {
        if groups.is_empty() {
            ChainsOutput::Empty
        } else {
            ChainsOutput::PerPolygon(groups)
        }
    }

    pub fn kind(&self) -> OutputKind {
        match self {
            ChainsOutput::Empty => OutputKind::Empty,
            ChainsOutput::Flat(_) => OutputKind::Flat,
            ChainsOutput::PerPolyline(_) => OutputKind::PerPolyline,
            ChainsOutput::PerPolygon(_) => OutputKind::PerPolygon,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, ChainsOutput::Empty)
    }

    /// Number of groups. A flat output is a single group, an empty output has none.
    pub fn group_count(&self) -> usize {
        match self {
            ChainsOutput::Empty => 0,
            ChainsOutput::Flat(_) => 1,
            ChainsOutput::PerPolyline(g) | ChainsOutput::PerPolygon(g) => g.len(),
        }
    }

    /// Chains of the group at `index`, `None` if out of range.
    pub fn group(&self, index: usize) -> Option<&[Chain<T>]> {
        match self {
            ChainsOutput::Empty => None,
            ChainsOutput::Flat(c) => (index == 0).then_some(c.as_slice()),
            ChainsOutput::PerPolyline(g) | ChainsOutput::PerPolygon(g) => {
                g.get(index).map(Vec::as_slice)
            }
        }
    }

    /// Total number of chains across all groups.
    pub fn chain_count(&self) -> usize {
        self.iter_chains().count()
    }

    /// Iterate the groups in order.
    pub fn groups(&self) -> impl Iterator<Item = &[Chain<T>]> + '_ {
        (0..self.group_count()).filter_map(move |i| self.group(i))
    }

    /// Iterate every chain, group by group.
    pub fn iter_chains(&self) -> impl Iterator<Item = &Chain<T>> + '_ {
        self.groups().flat_map(|g| g.iter())
    }

    /// Convert every point to another real type, see [Chain::cast].
    pub fn cast<U>(&self) -> Option<ChainsOutput<U>>
    where
        U: Real,
    {
        fn cast_list<T: Real, U: Real>(chains: &[Chain<T>]) -> Option<Vec<Chain<U>>> {
            chains.iter().map(|c| c.cast()).collect()
        }

        fn cast_groups<T: Real, U: Real>(groups: &[Vec<Chain<T>>]) -> Option<Vec<Vec<Chain<U>>>> {
            groups.iter().map(|g| cast_list(g)).collect()
        }

        Some(match self {
            ChainsOutput::Empty => ChainsOutput::Empty,
            ChainsOutput::Flat(c) => ChainsOutput::Flat(cast_list(c)?),
            ChainsOutput::PerPolyline(g) => ChainsOutput::PerPolyline(cast_groups(g)?),
            ChainsOutput::PerPolygon(g) => ChainsOutput::PerPolygon(cast_groups(g)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn chain(x: f64) -> Chain<f64> {
        Chain::from_points(vec![vec2(x, 0.0), vec2(x + 1.0, 0.0)])
    }

    #[test]
    fn empty_outer_lists_collapse() {
        assert!(ChainsOutput::<f64>::flat(Vec::new()).is_empty());
        assert!(ChainsOutput::<f64>::per_polyline(Vec::new()).is_empty());
        assert!(ChainsOutput::<f64>::per_polygon(Vec::new()).is_empty());
        assert_eq!(ChainsOutput::<f64>::Empty.group(0), None);
    }

    #[test]
    fn grouped_shapes_keep_empty_groups() {
        let out = ChainsOutput::per_polyline(vec![vec![chain(0.0)], vec![], vec![chain(5.0)]]);
        assert_eq!(out.kind(), OutputKind::PerPolyline);
        assert_eq!(out.group_count(), 3);
        assert_eq!(out.group(1).map(|g| g.len()), Some(0));
        assert_eq!(out.chain_count(), 2);
        assert_eq!(out.iter_chains().nth(1), Some(&chain(5.0)));
        assert_eq!(out.group(3), None);
        let sizes: Vec<_> = out.groups().map(|g| g.len()).collect();
        assert_eq!(sizes, vec![1, 0, 1]);
    }

    #[test]
    fn flat_is_single_group() {
        let out = ChainsOutput::flat(vec![chain(0.0), chain(2.0)]);
        assert_eq!(out.kind(), OutputKind::Flat);
        assert_eq!(out.group_count(), 1);
        assert_eq!(out.group(0).map(|g| g.len()), Some(2));
        assert_eq!(out.group(1), None);
    }

    #[test]
    fn cast_keeps_shape() {
        let out = ChainsOutput::per_polygon(vec![vec![], vec![chain(1.0)]]);
        let host: ChainsOutput<f32> = out.cast().unwrap();
        assert_eq!(host.kind(), OutputKind::PerPolygon);
        assert_eq!(host.group(1).unwrap()[0][1], vec2(2.0f32, 0.0f32));
    }
}

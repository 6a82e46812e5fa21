use super::{Chain, ChainStitcher};
use crate::{
    core::{
        math::{seg_bounding_box, Vector2},
        traits::Real,
    },
    overlap::{seg_overlap, OverlapInterval},
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder};

/// Edges of a closed polygon derived once from its points, with a spatial index of their bounding
/// boxes.
///
/// Edge `i` runs from point `i` to point `(i + 1) % n`, so an `n` point polygon has `n` edges
/// (a 2 point polygon has the same segment twice, once in each direction). Fewer than 2 points
/// gives no edges. Edges are read only after construction, so one `PolygonEdges` may be shared by
/// any number of concurrent polyline queries.
///
/// The index is only built when every edge has a finite bounding box, otherwise lookups scan the
/// edges linearly (a non-finite edge then never overlaps anything).
#[derive(Debug, Clone)]
pub struct PolygonEdges<T = f64>
where
    T: Real,
{
    edges: Vec<(Vector2<T>, Vector2<T>)>,
    spatial_index: Option<StaticAABB2DIndex<T>>,
}

impl<T> PolygonEdges<T>
where
    T: Real,
{
    /// Derive the edges of the polygon with the `points` given (implicitly closed).
    pub fn new(points: &[Vector2<T>]) -> Self {
        let n = points.len();
        let edges: Vec<_> = if n < 2 {
            Vec::new()
        } else {
            (0..n).map(|i| (points[i], points[(i + 1) % n])).collect()
        };

        let indexable = !edges.is_empty() && points.iter().all(Vector2::is_finite);
        let spatial_index = indexable.then(|| {
            let mut builder = StaticAABB2DIndexBuilder::new(edges.len());
            for &(c, d) in edges.iter() {
                let bb = seg_bounding_box(c, d);
                builder.add(bb.min_x, bb.min_y, bb.max_x, bb.max_y);
            }
            unwrap_spatial_index(builder)
        });

        Self {
            edges,
            spatial_index,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge at `index` as a `(start, end)` pair.
    #[inline]
    pub fn edge(&self, index: usize) -> (Vector2<T>, Vector2<T>) {
        self.edges[index]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &(Vector2<T>, Vector2<T>)> + '_ {
        self.edges.iter()
    }

    /// Spatial index of the edge bounding boxes, `None` when there are no edges or a point is not
    /// finite.
    #[inline]
    pub fn spatial_index(&self) -> Option<&StaticAABB2DIndex<T>> {
        self.spatial_index.as_ref()
    }

    /// Find the first edge (in polygon order) that the segment `a->b` overlaps collinearly.
    ///
    /// Returns the edge index and the overlap interval. When the segment overlaps several edges
    /// the lowest index wins, regardless of which overlap is longer.
    ///
    /// Candidate edges come from the spatial index queried with the segment's bounding box grown
    /// by `epsilon` (any overlapping edge's box must intersect it), they are then tested in
    /// ascending index order.
    pub fn first_overlap(
        &self,
        a: Vector2<T>,
        b: Vector2<T>,
        epsilon: T,
    ) -> Option<(usize, OverlapInterval<T>)> {
        let spatial_index = match &self.spatial_index {
            Some(index) => index,
            None => return self.first_overlap_linear(a, b, epsilon),
        };

        // extra fuzz so rounding in the box computation never drops a candidate
        let grow = epsilon + T::fuzzy_epsilon();
        let bb = seg_bounding_box(a, b);
        let mut candidates = spatial_index.query(
            bb.min_x - grow,
            bb.min_y - grow,
            bb.max_x + grow,
            bb.max_y + grow,
        );
        candidates.sort_unstable();

        candidates.into_iter().find_map(|i| {
            let (c, d) = self.edges[i];
            seg_overlap(a, b, c, d, epsilon).map(|interval| (i, interval))
        })
    }

    /// Same as [PolygonEdges::first_overlap] but tests every edge in order without the spatial
    /// index. Used to cross check the indexed lookup.
    pub fn first_overlap_linear(
        &self,
        a: Vector2<T>,
        b: Vector2<T>,
        epsilon: T,
    ) -> Option<(usize, OverlapInterval<T>)> {
        self.edges
            .iter()
            .enumerate()
            .find_map(|(i, &(c, d))| seg_overlap(a, b, c, d, epsilon).map(|interval| (i, interval)))
    }

    /// Stitch the chains of one polyline against these edges.
    ///
    /// No input validation is done here, see [collinear_chains](crate::collinear_chains) for the
    /// validating entry point. A polyline with fewer than 2 points or a polygon without edges gives
    /// an empty result.
    pub fn collinear_chains(&self, polyline: &[Vector2<T>], epsilon: T) -> Vec<Chain<T>> {
        if polyline.len() < 2 || self.edges.is_empty() {
            return Vec::new();
        }

        let mut stitcher = ChainStitcher::new(epsilon);
        for w in polyline.windows(2) {
            let overlap = self.first_overlap(w[0], w[1], epsilon).map(|(_, i)| i);
            stitcher.push(overlap);
        }

        stitcher.finish()
    }
}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building edge index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast coordinate type: {e}")
            }
        },
    }
}

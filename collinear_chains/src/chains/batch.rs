use super::{Chain, ChainOptions, PolygonEdges};
use crate::{
    core::{math::Vector2, traits::Real},
    validation::{validate_points, InputError, PathKind},
};

/// Extract the chains of `polyline` running along the edges of `polygon`.
///
/// Each polyline segment is tested against the polygon edges in polygon order and the first edge
/// it collinearly overlaps (within `options.epsilon`) supplies its overlap interval. Consecutive
/// intervals whose endpoints meet are stitched into one chain, a segment without overlap ends the
/// open chain. Chains are returned in the order they were closed.
///
/// Both inputs are validated first (polyline, then polygon): identical consecutive points, or a
/// first point repeated at the end of a path with more than 2 points, is an [InputError]. Inputs
/// too short to have segments (polyline or polygon with fewer than 2 points) give an empty result.
///
/// The computation runs in double precision whatever `T` is: points and `epsilon` are widened to
/// `f64` and the chain points are rounded back to `T`, so `f32` input gives the same chains as the
/// same points widened by the caller. [PolygonEdges] computes in `T` directly.
///
/// # Examples
///
/// ```
/// # use collinear_chains::core::math::*;
/// # use collinear_chains::*;
/// let square = [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0)];
/// let polyline = [vec2(0.0, 0.0), vec2(5.0, 0.0), vec2(5.0, 5.0)];
/// let chains = collinear_chains(&polyline, &square, &ChainOptions::new()).unwrap();
/// assert_eq!(chains.len(), 1);
/// assert_eq!(chains[0].points(), &[vec2(0.0, 0.0), vec2(5.0, 0.0)]);
/// ```
pub fn collinear_chains<T>(
    polyline: &[Vector2<T>],
    polygon: &[Vector2<T>],
    options: &ChainOptions<T>,
) -> Result<Vec<Chain<T>>, InputError>
where
    T: Real,
{
    options.validate()?;
    validate_points(polyline, PathKind::Polyline).map_err(log_rejected)?;
    validate_points(polygon, PathKind::Polygon).map_err(log_rejected)?;

    if polyline.len() < 2 || polygon.len() < 2 {
        return Ok(Vec::new());
    }

    let edges = PolygonEdges::new(&widen_points(polygon));
    let chains = edges.collinear_chains(&widen_points(polyline), options.epsilon.widen());
    log::debug!(
        "collinear chains: {} polyline points, {} polygon edges, {} chains",
        polyline.len(),
        edges.len(),
        chains.len()
    );

    Ok(narrow_chains(chains))
}

/// Extract the chains of every polyline in `polylines` against one `polygon`.
///
/// The polygon edges are derived once and shared, each polyline is stitched independently. The
/// result is parallel to `polylines`: entry `i` holds exactly what [collinear_chains] returns for
/// `polylines[i]`. Polylines with fewer than 2 points give an empty entry.
///
/// The polygon is validated first, then every polyline; a polyline error is wrapped in
/// [InputError::InBatch] with its position. Like [collinear_chains] the computation runs in double
/// precision.
pub fn collinear_chains_many<T, P>(
    polylines: &[P],
    polygon: &[Vector2<T>],
    options: &ChainOptions<T>,
) -> Result<Vec<Vec<Chain<T>>>, InputError>
where
    T: Real,
    P: AsRef<[Vector2<T>]>,
{
    let edges = prepare_batch(polylines, polygon, options)?;
    let epsilon = options.epsilon.widen();
    let results: Vec<_> = polylines
        .iter()
        .map(|pl| narrow_chains(edges.collinear_chains(&widen_points(pl.as_ref()), epsilon)))
        .collect();

    log_batch(&results, &edges);
    Ok(results)
}

/// Parallel version of [collinear_chains_many], the output is identical.
///
/// Polylines are distributed over the rayon thread pool; the polygon edges are shared read only
/// and every result is written to its own slot.
#[cfg(feature = "rayon")]
pub fn collinear_chains_many_par<T, P>(
    polylines: &[P],
    polygon: &[Vector2<T>],
    options: &ChainOptions<T>,
) -> Result<Vec<Vec<Chain<T>>>, InputError>
where
    T: Real,
    P: AsRef<[Vector2<T>]> + Sync,
{
    use rayon::prelude::*;

    let edges = prepare_batch(polylines, polygon, options)?;
    let epsilon = options.epsilon.widen();
    let results: Vec<_> = polylines
        .par_iter()
        .map(|pl| narrow_chains(edges.collinear_chains(&widen_points(pl.as_ref()), epsilon)))
        .collect();

    log_batch(&results, &edges);
    Ok(results)
}

fn prepare_batch<T, P>(
    polylines: &[P],
    polygon: &[Vector2<T>],
    options: &ChainOptions<T>,
) -> Result<PolygonEdges<f64>, InputError>
where
    T: Real,
    P: AsRef<[Vector2<T>]>,
{
    options.validate()?;
    validate_points(polygon, PathKind::Polygon).map_err(log_rejected)?;
    for (position, pl) in polylines.iter().enumerate() {
        validate_points(pl.as_ref(), PathKind::Polyline)
            .map_err(|e| log_rejected(e.in_batch(position)))?;
    }

    Ok(PolygonEdges::new(&widen_points(polygon)))
}

fn log_batch<T>(results: &[Vec<Chain<T>>], edges: &PolygonEdges<f64>)
where
    T: Real,
{
    log::debug!(
        "collinear chains batch: {} polylines, {} polygon edges, {} chains",
        results.len(),
        edges.len(),
        results.iter().map(Vec::len).sum::<usize>()
    );
}

fn widen_points<T>(points: &[Vector2<T>]) -> Vec<Vector2<f64>>
where
    T: Real,
{
    points.iter().map(Vector2::widen).collect()
}

fn narrow_chains<T>(chains: Vec<Chain<f64>>) -> Vec<Chain<T>>
where
    T: Real,
{
    chains.into_iter().map(Chain::narrow).collect()
}

fn log_rejected(e: InputError) -> InputError {
    log::debug!("rejected input: {e}");
    e
}

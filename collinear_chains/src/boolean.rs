//! Interface to an external polygon boolean (clipping) engine, and the batched open path
//! operations built on top of it.
//!
//! This crate does not implement general boolean operations. Callers plug in an engine through
//! [BooleanEngine] and [OpenClipper]; the functions here only prepare inputs, drive the engine,
//! and shape its results. "Open" subjects have no closing segment, "closed" clips implicitly
//! connect their last point back to the first.
use crate::{
    chains::Chain,
    core::{math::Vector2, traits::Real},
};

/// Ordered list of points exchanged with the engine.
pub type Path<T> = Vec<Vector2<T>>;

/// Boolean operation applied by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClipType {
    Intersection,
    Union,
    Difference,
    Xor,
}

/// Rule deciding which regions of the clip paths count as filled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FillRule {
    EvenOdd,
    NonZero,
    Positive,
    Negative,
}

/// Paths produced by one [OpenClipper::execute] run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClipSolution<T> {
    /// Closed result paths (from closed subjects).
    pub closed: Vec<Path<T>>,
    /// Open result paths: the pieces of open subjects selected by the operation.
    pub open: Vec<Path<T>>,
}

/// Incremental clipper supporting open subjects against closed clips.
pub trait OpenClipper<T>
where
    T: Real,
{
    type Error: std::error::Error;

    fn add_open_subjects(&mut self, paths: &[Path<T>]);

    fn add_clips(&mut self, paths: &[Path<T>]);

    fn execute(self, clip_type: ClipType, fill_rule: FillRule)
        -> Result<ClipSolution<T>, Self::Error>;
}

/// External polygon boolean engine.
pub trait BooleanEngine<T>
where
    T: Real,
{
    type Error: std::error::Error;
    type Clipper: OpenClipper<T, Error = Self::Error>;

    /// Intersection of closed `subjects` with closed `clips`. `precision` is the number of decimal
    /// places the engine keeps.
    fn intersect(
        &self,
        subjects: &[Path<T>],
        clips: &[Path<T>],
        fill_rule: FillRule,
        precision: i32,
    ) -> Result<Vec<Path<T>>, Self::Error>;

    /// Create a fresh, empty clipper.
    fn clipper(&self) -> Self::Clipper;
}

/// Decimal places used for batched polygon intersection.
pub const POLYGON_INTERSECT_PRECISION: i32 = 2;

/// Intersect `subject` with each polygon of `polygons` separately.
///
/// Returns one group per polygon (parallel to `polygons`) with the result polygons having at
/// least 3 points. A subject with fewer than 3 points gives all groups empty without calling the
/// engine; a polygon with fewer than 3 points gives an empty group.
pub fn intersect_polygons_batched<T, E>(
    engine: &E,
    polygons: &[Path<T>],
    subject: &[Vector2<T>],
) -> Result<Vec<Vec<Chain<T>>>, E::Error>
where
    T: Real,
    E: BooleanEngine<T>,
{
    let mut groups = vec![Vec::new(); polygons.len()];
    if subject.len() < 3 {
        return Ok(groups);
    }

    let subjects = [subject.to_vec()];
    for (group, polygon) in groups.iter_mut().zip(polygons) {
        if polygon.len() < 3 {
            continue;
        }

        let solution = engine.intersect(
            &subjects,
            std::slice::from_ref(polygon),
            FillRule::NonZero,
            POLYGON_INTERSECT_PRECISION,
        )?;
        *group = keep_paths(solution, 3);
    }

    Ok(groups)
}

/// Intersect all open `polylines` with each closed polygon of `polygons` separately.
///
/// Returns one group per polygon (parallel to `polygons`) holding the open fragments (at least 2
/// points) of all polylines lying inside that polygon. Polylines with fewer than 2 points are
/// ignored, polygons with fewer than 3 points give an empty group.
pub fn intersect_many_polylines_with_polygons<T, E>(
    engine: &E,
    polylines: &[Path<T>],
    polygons: &[Path<T>],
) -> Result<Vec<Vec<Chain<T>>>, E::Error>
where
    T: Real,
    E: BooleanEngine<T>,
{
    let subjects = open_subjects(polylines, |pl| pl.to_vec());
    intersect_subjects_per_polygon(engine, &subjects, polygons)
}

/// Same as [intersect_many_polylines_with_polygons] but every polyline is treated as a ring: its
/// first point is appended when it differs from the last, adding the closing segment.
pub fn intersect_many_ring_polylines_with_polygons<T, E>(
    engine: &E,
    polylines: &[Path<T>],
    polygons: &[Path<T>],
) -> Result<Vec<Vec<Chain<T>>>, E::Error>
where
    T: Real,
    E: BooleanEngine<T>,
{
    let subjects = open_subjects(polylines, ring_path);
    intersect_subjects_per_polygon(engine, &subjects, polygons)
}

/// Parts of all open `polylines` lying outside every polygon of `polygons`, in one engine run.
///
/// Polylines with fewer than 2 points are ignored, polygons with fewer than 3 points are not used
/// as clips. Returns a flat list of open fragments with at least 2 points.
pub fn difference_many_polylines_with_polygons<T, E>(
    engine: &E,
    polylines: &[Path<T>],
    polygons: &[Path<T>],
) -> Result<Vec<Chain<T>>, E::Error>
where
    T: Real,
    E: BooleanEngine<T>,
{
    let subjects = open_subjects(polylines, |pl| pl.to_vec());
    if subjects.is_empty() {
        return Ok(Vec::new());
    }

    let clips: Vec<_> = polygons.iter().filter(|p| p.len() >= 3).cloned().collect();
    let mut clipper = engine.clipper();
    clipper.add_open_subjects(&subjects);
    if !clips.is_empty() {
        clipper.add_clips(&clips);
    }

    let solution = clipper.execute(ClipType::Difference, FillRule::NonZero)?;
    log::debug!(
        "difference: {} subjects, {} clips, {} open fragments",
        subjects.len(),
        clips.len(),
        solution.open.len()
    );
    Ok(keep_paths(solution.open, 2))
}

fn intersect_subjects_per_polygon<T, E>(
    engine: &E,
    subjects: &[Path<T>],
    polygons: &[Path<T>],
) -> Result<Vec<Vec<Chain<T>>>, E::Error>
where
    T: Real,
    E: BooleanEngine<T>,
{
    let mut groups = vec![Vec::new(); polygons.len()];
    if subjects.is_empty() {
        return Ok(groups);
    }

    for (group, polygon) in groups.iter_mut().zip(polygons) {
        if polygon.len() < 3 {
            continue;
        }

        let mut clipper = engine.clipper();
        clipper.add_open_subjects(subjects);
        clipper.add_clips(std::slice::from_ref(polygon));
        let solution = clipper.execute(ClipType::Intersection, FillRule::NonZero)?;
        *group = keep_paths(solution.open, 2);
    }

    log::debug!(
        "intersect: {} subjects, {} polygons, {} open fragments",
        subjects.len(),
        polygons.len(),
        groups.iter().map(Vec::len).sum::<usize>()
    );
    Ok(groups)
}

fn open_subjects<T, F>(polylines: &[Path<T>], convert: F) -> Vec<Path<T>>
where
    T: Real,
    F: Fn(&[Vector2<T>]) -> Path<T>,
{
    polylines
        .iter()
        .filter(|pl| pl.len() >= 2)
        .map(|pl| convert(pl.as_slice()))
        .collect()
}

fn ring_path<T>(polyline: &[Vector2<T>]) -> Path<T>
where
    T: Real,
{
    let mut path = Vec::with_capacity(polyline.len() + 1);
    path.extend_from_slice(polyline);
    if let (Some(&first), Some(&last)) = (polyline.first(), polyline.last()) {
        if first != last {
            path.push(first);
        }
    }

    path
}

fn keep_paths<T>(paths: Vec<Path<T>>, min_points: usize) -> Vec<Chain<T>>
where
    T: Real,
{
    paths
        .into_iter()
        .filter(|p| p.len() >= min_points)
        .map(Chain::from_points)
        .collect()
}

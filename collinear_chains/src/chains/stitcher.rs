use super::Chain;
use crate::{
    core::{math::Vector2, traits::Real},
    overlap::OverlapInterval,
};
use std::collections::VecDeque;

/// Action taken by [ChainStitcher::push] for one polyline segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StitchAction {
    /// No overlap and no open chain.
    Skipped,
    /// No overlap, the open chain was finalized.
    Closed,
    /// Overlap started a new chain (no chain was open).
    Seeded,
    /// Interval `start` matched the chain's last point, `end` was appended.
    AppendEnd,
    /// Interval `end` matched the chain's last point, `start` was appended.
    AppendStart,
    /// Interval `start` matched the chain's first point, `end` was prepended.
    PrependEnd,
    /// Interval `end` matched the chain's first point, `start` was prepended.
    PrependStart,
    /// Interval matched neither chain end, the open chain was finalized and a new one seeded.
    Restarted,
}

/// Incrementally stitches per segment overlap results into chains.
///
/// Results must be pushed in polyline traversal order, one per polyline segment. Adjacency of an
/// interval endpoint to a chain end uses inclusive distance `<= epsilon`, tested in a fixed
/// priority order: extend from the last point before the first point, and match the interval's
/// `start` before its `end`. The priority makes the result reproducible when several tests pass at
/// once (e.g. short chains whose ends are within `epsilon` of each other).
///
/// # Examples
///
/// ```
/// # use collinear_chains::core::math::*;
/// # use collinear_chains::*;
/// let mut stitcher = ChainStitcher::new(0.0);
/// let i1 = OverlapInterval::new(vec2(0.0, 0.0), vec2(5.0, 0.0));
/// let i2 = OverlapInterval::new(vec2(5.0, 0.0), vec2(10.0, 0.0));
/// assert_eq!(stitcher.push(Some(i1)), StitchAction::Seeded);
/// assert_eq!(stitcher.push(Some(i2)), StitchAction::AppendEnd);
/// assert_eq!(stitcher.push(None), StitchAction::Closed);
/// let chains = stitcher.finish();
/// assert_eq!(chains.len(), 1);
/// assert_eq!(chains[0].points(), &[vec2(0.0, 0.0), vec2(5.0, 0.0), vec2(10.0, 0.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct ChainStitcher<T = f64>
where
    T: Real,
{
    epsilon: T,
    current: VecDeque<Vector2<T>>,
    finished: Vec<Chain<T>>,
}

impl<T> ChainStitcher<T>
where
    T: Real,
{
    pub fn new(epsilon: T) -> Self {
        Self {
            epsilon,
            current: VecDeque::new(),
            finished: Vec::new(),
        }
    }

    /// Number of chains finalized so far (the open chain is not counted).
    #[inline]
    pub fn finished_count(&self) -> usize {
        self.finished.len()
    }

    /// Points of the chain currently being built, empty if none is open.
    #[inline]
    pub fn open_chain(&self) -> &VecDeque<Vector2<T>> {
        &self.current
    }

    /// Consume the overlap result of the next polyline segment.
    pub fn push(&mut self, overlap: Option<OverlapInterval<T>>) -> StitchAction {
        let action = match overlap {
            None => {
                if self.close_current() {
                    StitchAction::Closed
                } else {
                    StitchAction::Skipped
                }
            }
            Some(interval) => self.extend(interval),
        };

        log::trace!("stitch {:?}: {:?}", overlap, action);
        action
    }

    fn extend(&mut self, interval: OverlapInterval<T>) -> StitchAction {
        let OverlapInterval { start, end } = interval;
        let (first, last) = match (self.current.front(), self.current.back()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => {
                self.seed(interval);
                return StitchAction::Seeded;
            }
        };

        let eps = self.epsilon;
        if last.within_dist(start, eps) {
            self.current.push_back(end);
            StitchAction::AppendEnd
        } else if last.within_dist(end, eps) {
            self.current.push_back(start);
            StitchAction::AppendStart
        } else if first.within_dist(start, eps) {
            self.current.push_front(end);
            StitchAction::PrependEnd
        } else if first.within_dist(end, eps) {
            self.current.push_front(start);
            StitchAction::PrependStart
        } else {
            self.close_current();
            self.seed(interval);
            StitchAction::Restarted
        }
    }

    fn seed(&mut self, interval: OverlapInterval<T>) {
        debug_assert!(self.current.is_empty());
        self.current.push_back(interval.start);
        self.current.push_back(interval.end);
    }

    /// Finalize the open chain, returns `false` if there was none.
    fn close_current(&mut self) -> bool {
        if self.current.is_empty() {
            return false;
        }

        let points: Vec<_> = self.current.drain(..).collect();
        self.finished.push(Chain::from_points(points));
        true
    }

    /// Finalize the open chain (if any) and return all chains in the order they were closed.
    pub fn finish(mut self) -> Vec<Chain<T>> {
        self.close_current();
        self.finished
    }
}

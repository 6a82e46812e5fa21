//! Extract the parts of an open polyline that run along the edges of a closed polygon.
//!
//! Every polyline segment is tested against the polygon edges (in polygon order, first match
//! wins) for a collinear overlap within a tolerance `epsilon`. The overlapping sub-segments are
//! stitched, in polyline order, into maximal contiguous [Chain]s.
//!
//! # Examples
//!
//! ```
//! use collinear_chains::{collinear_chains, points, ChainOptions};
//!
//! let square = points![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
//! // leaves the bottom edge between x = 3 and x = 6
//! let polyline = points![(0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (6.0, 0.0), (9.0, 0.0)];
//! let chains = collinear_chains(&polyline, &square, &ChainOptions::new()).unwrap();
//! assert_eq!(chains.len(), 2);
//! assert_eq!(chains[0].points(), points![(0.0, 0.0), (3.0, 0.0)].as_slice());
//! assert_eq!(chains[1].points(), points![(6.0, 0.0), (9.0, 0.0)].as_slice());
//! ```
//!
//! # Features
//!
//! * `serde`: serialize/deserialize points, intervals, chains, options, and outputs.
//! * `rayon`: [collinear_chains_many_par], the parallel form of [collinear_chains_many].

#[macro_use]
mod macros;

pub mod boolean;
pub mod chains;
pub mod core;
mod output;
mod overlap;
mod validation;

pub use static_aabb2d_index;

pub use crate::chains::*;
pub use crate::output::*;
pub use crate::overlap::*;
pub use crate::validation::*;

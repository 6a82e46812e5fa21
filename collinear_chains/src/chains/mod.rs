//! Stitching of collinear overlaps into chains, and the single/batch entry points.
mod batch;
mod chain;
mod options;
mod polygon_edges;
mod stitcher;

pub use batch::*;
pub use chain::*;
pub use options::*;
pub use polygon_edges::*;
pub use stitcher::*;

pub mod segment;
pub mod solution;

pub use segment::Segment;
pub use solution::{PlotData, SolveRequest, Solution};

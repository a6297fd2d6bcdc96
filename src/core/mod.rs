pub mod allocator;
pub mod jobs;
pub mod planner;

pub use allocator::calculate_intervals;
pub use jobs::{JobList, MAX_JOBS};
pub use planner::Planner;

// Table-driven features around the matching core.

pub mod assistant;
pub mod cv;
pub mod scholarships;

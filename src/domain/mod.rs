// Domain layer: value types and ports. Only std/serde/chrono here.

pub mod model;
pub mod ports;
pub mod profile;
pub mod search;

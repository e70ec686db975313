pub mod boundary;
pub mod crossing;
pub mod distance;
pub mod position;
pub mod tracker;

pub use boundary::{Boundary, BoundaryCategory};
pub use crossing::{detect_crossings, point_in_polygon, CrossingDirection, CrossingEvent};
pub use distance::{distance_km, track_length_km};
pub use position::{BoundingBox, Position};
pub use tracker::PositionTracker;

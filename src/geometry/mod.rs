pub mod bounds;
pub mod polygon_math;

pub use bounds::{SectionBounds, VoidBounds};
pub use polygon_math::{
    area, centroid, ensure_clockwise, ensure_counter_clockwise, net_area, perimeter,
};

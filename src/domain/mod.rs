pub mod centerline;
pub mod cutline;
pub mod material;
pub mod point;
pub mod polygon;
pub mod section;

pub use centerline::{Centerline, CenterlineKind};
pub use cutline::{Cutline, CutlineKind};
pub use material::MaterialProperties;
pub use point::Point2D;
pub use polygon::{Polygon, PolygonKind};
pub use section::{DeckSection, ReferencePoint};

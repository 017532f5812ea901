use super::{Centerline, Cutline, MaterialProperties, Point2D, Polygon};

/// User-chosen insertion point for the section in the target model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferencePoint {
    pub x: f64,
    pub y: f64,
    pub description: String,
}

impl ReferencePoint {
    pub fn new(x: f64, y: f64, description: impl Into<String>) -> Self {
        Self {
            x,
            y,
            description: description.into(),
        }
    }
}

/// A bridge deck cross-section ready for transfer.
///
/// Constructed either from raw CAD polygons (see [`crate::builder`]) or by
/// loading an interchange file. `centerlines` and `cutlines` are derived by
/// [`crate::derive::derive_lines`] and are not part of the persisted file;
/// consumers recompute them after load.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSection {
    pub name: String,
    /// Longitudinal position along the bridge alignment (passthrough scalar)
    pub station: f64,
    /// Net cross-section area (exterior minus voids)
    pub area: f64,
    /// Centroid of the exterior boundary
    pub centroid: Point2D,
    pub reference_point: ReferencePoint,
    pub material: MaterialProperties,
    /// Outer boundary, winding normalized clockwise
    pub exterior_boundary: Polygon,
    /// Interior openings, winding normalized counter-clockwise
    pub interior_voids: Vec<Polygon>,
    pub centerlines: Vec<Centerline>,
    pub cutlines: Vec<Cutline>,
}

impl DeckSection {
    pub fn num_voids(&self) -> usize {
        self.interior_voids.len()
    }
}

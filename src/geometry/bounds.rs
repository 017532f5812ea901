//! Section-level extrema derived from a section's polygons.
//!
//! One [`SectionBounds`] is computed per derivation pass and discarded after
//! use; it is never persisted.

use crate::domain::{DeckSection, Point2D};
use crate::error::{Result, SectionError};
use crate::geometry::polygon_math;

/// Bounding box and centroid of a single void polygon
#[derive(Debug, Clone)]
pub struct VoidBounds {
    pub name: String,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub centroid: Point2D,
}

/// Extrema of a whole section: the exterior bounding box plus, when voids
/// exist, the extreme void edges that constrain slab and web placement.
///
/// The four `Option` fields are `None` for a solid section; downstream
/// derivation branches on their presence.
#[derive(Debug, Clone)]
pub struct SectionBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub top_surface_y: f64,
    pub bottom_surface_y: f64,
    /// Lowest top edge across all voids (min of per-void max Y)
    pub top_void_edge_y: Option<f64>,
    /// Highest bottom edge across all voids (max of per-void min Y)
    pub bottom_void_edge_y: Option<f64>,
    /// Leftmost void edge (min of per-void min X)
    pub leftmost_void_edge_x: Option<f64>,
    /// Rightmost void edge (max of per-void max X)
    pub rightmost_void_edge_x: Option<f64>,
    pub void_bounds: Vec<VoidBounds>,
}

fn bbox(points: &[Point2D]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    (min_x, max_x, min_y, max_y)
}

impl SectionBounds {
    /// Analyze a section's polygons into bounds.
    ///
    /// Fails with `InvalidGeometry` when the exterior boundary is empty.
    pub fn analyze(section: &DeckSection) -> Result<Self> {
        let exterior = &section.exterior_boundary.points;
        if exterior.is_empty() {
            return Err(SectionError::InvalidGeometry(format!(
                "exterior boundary of section '{}' has no points",
                section.name
            )));
        }

        let (min_x, max_x, min_y, max_y) = bbox(exterior);

        let mut bounds = Self {
            min_x,
            max_x,
            min_y,
            max_y,
            top_surface_y: max_y,
            bottom_surface_y: min_y,
            top_void_edge_y: None,
            bottom_void_edge_y: None,
            leftmost_void_edge_x: None,
            rightmost_void_edge_x: None,
            void_bounds: Vec::new(),
        };

        for void in &section.interior_voids {
            let (v_min_x, v_max_x, v_min_y, v_max_y) = bbox(&void.points);
            let vb = VoidBounds {
                name: void.name.clone(),
                min_x: v_min_x,
                max_x: v_max_x,
                min_y: v_min_y,
                max_y: v_max_y,
                centroid: polygon_math::centroid(&void.points),
            };

            bounds.top_void_edge_y = Some(match bounds.top_void_edge_y {
                Some(y) => y.min(vb.max_y),
                None => vb.max_y,
            });
            bounds.bottom_void_edge_y = Some(match bounds.bottom_void_edge_y {
                Some(y) => y.max(vb.min_y),
                None => vb.min_y,
            });
            bounds.leftmost_void_edge_x = Some(match bounds.leftmost_void_edge_x {
                Some(x) => x.min(vb.min_x),
                None => vb.min_x,
            });
            bounds.rightmost_void_edge_x = Some(match bounds.rightmost_void_edge_x {
                Some(x) => x.max(vb.max_x),
                None => vb.max_x,
            });

            bounds.void_bounds.push(vb);
        }

        Ok(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

//! Assemble a [`DeckSection`] from raw selected polygons.
//!
//! The design-side CAD adapter hands over whatever closed polylines the user
//! selected, in selection order. Exterior-vs-void assignment is derived here:
//! the polygon with the largest absolute area is the exterior, everything
//! else is a void. Winding is normalized (exterior clockwise, voids
//! counter-clockwise) and the section area/centroid are computed.

use crate::domain::{DeckSection, MaterialProperties, Polygon, PolygonKind, ReferencePoint};
use crate::error::{Result, SectionError};
use crate::geometry;

/// Build a section from raw polygons plus the user-entered metadata.
///
/// Fails with `InvalidGeometry` when no polygons were selected or the
/// exterior candidate has fewer than 3 points. Ties in area keep the
/// original selection order.
pub fn assemble_section(
    polygons: Vec<Polygon>,
    name: impl Into<String>,
    station: f64,
    reference_point: ReferencePoint,
    material: MaterialProperties,
) -> Result<DeckSection> {
    // Largest absolute area first; stable sort preserves selection order on ties
    let mut by_area = polygons;
    by_area.sort_by(|a, b| {
        let area_a = geometry::area(&a.points).abs();
        let area_b = geometry::area(&b.points).abs();
        area_b.total_cmp(&area_a)
    });

    let mut drain = by_area.into_iter();
    let mut exterior = drain
        .next()
        .ok_or_else(|| SectionError::InvalidGeometry("no polygons selected".to_string()))?;

    if exterior.points.len() < 3 {
        return Err(SectionError::InvalidGeometry(format!(
            "exterior boundary needs at least 3 points, got {}",
            exterior.points.len()
        )));
    }

    exterior.name = "Exterior".to_string();
    exterior.kind = PolygonKind::Solid;
    exterior.points = geometry::ensure_clockwise(&exterior.points);

    let interior_voids: Vec<Polygon> = drain
        .enumerate()
        .map(|(i, mut v)| {
            v.name = format!("Void_{}", i + 1);
            v.kind = PolygonKind::Opening;
            v.points = geometry::ensure_counter_clockwise(&v.points);
            v
        })
        .collect();

    let centroid = geometry::centroid(&exterior.points);

    let mut section = DeckSection {
        name: name.into(),
        station,
        area: 0.0,
        centroid,
        reference_point,
        material,
        exterior_boundary: exterior,
        interior_voids,
        centerlines: Vec::new(),
        cutlines: Vec::new(),
    };
    section.area = geometry::net_area(&section);

    Ok(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point2D;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2D> {
        vec![
            Point2D::new(x0, y0),
            Point2D::new(x1, y0),
            Point2D::new(x1, y1),
            Point2D::new(x0, y1),
        ]
    }

    fn raw(name: &str, points: Vec<Point2D>) -> Polygon {
        // Selection comes in with no meaningful kind yet
        Polygon::new(name, PolygonKind::Solid, points)
    }

    #[test]
    fn test_largest_polygon_becomes_exterior() {
        // Selected void-first: assignment is by area, not selection order
        let section = assemble_section(
            vec![
                raw("small", rect(2.0, 0.5, 4.0, 1.5)),
                raw("big", rect(0.0, 0.0, 10.0, 2.0)),
                raw("mid", rect(5.0, 0.5, 9.0, 1.5)),
            ],
            "DeckSection_01",
            0.0,
            ReferencePoint::default(),
            MaterialProperties::default(),
        )
        .unwrap();

        assert_eq!(section.exterior_boundary.name, "Exterior");
        assert_eq!(section.exterior_boundary.kind, PolygonKind::Solid);
        assert_eq!(section.num_voids(), 2);
        // Voids renamed in descending area order
        assert_eq!(section.interior_voids[0].name, "Void_1");
        assert!((geometry::area(&section.interior_voids[0].points).abs() - 4.0).abs() < 1e-12);
        assert_eq!(section.interior_voids[1].name, "Void_2");
    }

    #[test]
    fn test_winding_normalized() {
        let ccw_exterior: Vec<Point2D> = rect(0.0, 0.0, 10.0, 2.0);
        let cw_void: Vec<Point2D> = rect(2.0, 0.5, 8.0, 1.5).iter().rev().copied().collect();

        let section = assemble_section(
            vec![raw("a", ccw_exterior), raw("b", cw_void)],
            "S",
            0.0,
            ReferencePoint::default(),
            MaterialProperties::default(),
        )
        .unwrap();

        assert!(geometry::area(&section.exterior_boundary.points) > 0.0);
        assert!(geometry::area(&section.interior_voids[0].points) < 0.0);
    }

    #[test]
    fn test_area_and_centroid_computed() {
        let section = assemble_section(
            vec![
                raw("ext", rect(0.0, 0.0, 10.0, 2.0)),
                raw("void", rect(1.0, 0.5, 5.0, 1.5)),
            ],
            "S",
            42.0,
            ReferencePoint::default(),
            MaterialProperties::default(),
        )
        .unwrap();

        assert!((section.area - 16.0).abs() < 1e-12);
        assert!((section.centroid.x - 5.0).abs() < 1e-12);
        assert!((section.centroid.y - 1.0).abs() < 1e-12);
        assert_eq!(section.station, 42.0);
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = assemble_section(
            Vec::new(),
            "S",
            0.0,
            ReferencePoint::default(),
            MaterialProperties::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SectionError::InvalidGeometry(_)));
    }

    #[test]
    fn test_degenerate_exterior_rejected() {
        let err = assemble_section(
            vec![raw("line", vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)])],
            "S",
            0.0,
            ReferencePoint::default(),
            MaterialProperties::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SectionError::InvalidGeometry(_)));
    }
}

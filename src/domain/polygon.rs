use super::Point2D;

/// Role a polygon plays in a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonKind {
    /// Exterior boundary material
    Solid,
    /// Interior void subtracted from the exterior
    Opening,
}

/// A closed polygon from the source drawing.
///
/// The point list is implicitly closed: the last point connects back to the
/// first. A valid polygon has at least 3 points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub name: String,
    pub kind: PolygonKind,
    pub points: Vec<Point2D>,
    /// Entity handle in the source CAD drawing, when known. Not persisted.
    pub handle: Option<String>,
}

impl Polygon {
    pub fn new(name: impl Into<String>, kind: PolygonKind, points: Vec<Point2D>) -> Self {
        Self {
            name: name.into(),
            kind,
            points,
            handle: None,
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_construction() {
        let poly = Polygon::new(
            "Exterior",
            PolygonKind::Solid,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(1.0, 1.0),
            ],
        )
        .with_handle("2F1");

        assert_eq!(poly.name, "Exterior");
        assert_eq!(poly.kind, PolygonKind::Solid);
        assert_eq!(poly.points.len(), 3);
        assert_eq!(poly.handle.as_deref(), Some("2F1"));
    }
}

use super::Point2D;

/// Which structural element a centerline idealizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterlineKind {
    /// Horizontal centerline through the top slab mid-thickness
    TopSlab,
    /// Horizontal centerline through the bottom slab mid-thickness
    BottomSlab,
    /// Vertical centerline of an exterior (edge) web
    WebExterior,
    /// Vertical centerline of a web between two voids
    WebInterior,
}

/// A mid-thickness reference polyline for shell/frame idealization.
///
/// Straight lines carry 2 points; the model supports longer polylines for
/// contour-following lines, though the current deriver emits straight lines
/// only.
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    pub name: String,
    pub kind: CenterlineKind,
    pub description: String,
    pub points: Vec<Point2D>,
}

impl Centerline {
    pub fn new(
        points: Vec<Point2D>,
        kind: CenterlineKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            points,
        }
    }

    /// Convenience constructor for simple 2-point centerlines
    pub fn straight(
        start: Point2D,
        end: Point2D,
        kind: CenterlineKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(vec![start, end], kind, name, description)
    }

    pub fn is_web(&self) -> bool {
        matches!(
            self.kind,
            CenterlineKind::WebExterior | CenterlineKind::WebInterior
        )
    }
}

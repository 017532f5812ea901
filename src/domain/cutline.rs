use super::Point2D;

/// Orientation and role of a cutline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutlineKind {
    /// Horizontal cutline through the second-highest void points
    HorizontalTop,
    /// Horizontal cutline through the second-lowest void points
    HorizontalBottom,
    /// Vertical cutline between two adjacent web centerlines
    VerticalWeb,
}

/// A reference polyline positioned between centerlines, delineating the
/// modeling sub-regions of a section.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutline {
    pub name: String,
    pub kind: CutlineKind,
    pub description: String,
    pub points: Vec<Point2D>,
}

impl Cutline {
    pub fn new(
        points: Vec<Point2D>,
        kind: CutlineKind,
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

    /// Convenience constructor for simple 2-point cutlines
    pub fn straight(
        start: Point2D,
        end: Point2D,
        kind: CutlineKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(vec![start, end], kind, name, description)
    }
}

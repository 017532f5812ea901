/// A 2D coordinate in section-local space.
///
/// X runs across the deck width, Y through its depth. Units are whatever the
/// source drawing used; the interchange file carries the unit label through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

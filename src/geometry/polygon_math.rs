//! Pure polygon math over [`Point2D`] lists.
//!
//! All functions treat the point list as implicitly closed (last point
//! connects back to the first) and never mutate their input.

use crate::domain::{DeckSection, Point2D};

/// Signed area below which a polygon is considered degenerate
const DEGENERATE_AREA: f64 = 1e-10;

/// Signed polygon area via the shoelace formula, cyclic indexing.
///
/// Returns 0 for fewer than 3 points. The sign encodes winding order: the
/// source CAD's clockwise convention yields a positive area, the reverse
/// traversal a negative one.
pub fn area(points: &[Point2D]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y;
        sum -= points[j].x * points[i].y;
    }

    sum / 2.0
}

/// Polygon centroid weighted by signed area.
///
/// Returns (0, 0) for fewer than 3 points or a near-zero area; callers must
/// treat that as a degenerate sentinel, not a real centroid.
pub fn centroid(points: &[Point2D]) -> Point2D {
    if points.len() < 3 {
        return Point2D::new(0.0, 0.0);
    }

    let signed_area = area(points);
    if signed_area.abs() < DEGENERATE_AREA {
        return Point2D::new(0.0, 0.0);
    }

    let n = points.len();
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let factor = points[i].x * points[j].y - points[j].x * points[i].y;
        cx += (points[i].x + points[j].x) * factor;
        cy += (points[i].y + points[j].y) * factor;
    }

    let area_factor = 6.0 * signed_area;
    Point2D::new(cx / area_factor, cy / area_factor)
}

/// Return the points in clockwise order (positive area), reversing if needed.
/// No-op for fewer than 3 points.
pub fn ensure_clockwise(points: &[Point2D]) -> Vec<Point2D> {
    if points.len() >= 3 && area(points) < 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

/// Return the points in counter-clockwise order (negative area), reversing
/// if needed. Used for voids. No-op for fewer than 3 points.
pub fn ensure_counter_clockwise(points: &[Point2D]) -> Vec<Point2D> {
    if points.len() >= 3 && area(points) > 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

/// Net section area: |exterior| minus the sum of |void| areas.
pub fn net_area(section: &DeckSection) -> f64 {
    let exterior = area(&section.exterior_boundary.points).abs();
    let voids: f64 = section
        .interior_voids
        .iter()
        .map(|v| area(&v.points).abs())
        .sum();

    exterior - voids
}

/// Closed-polygon perimeter: sum of Euclidean distances between
/// cyclic-adjacent point pairs. Returns 0 for fewer than 2 points.
pub fn perimeter(points: &[Point2D]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let n = points.len();
    let mut total = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let dx = points[j].x - points[i].x;
        let dy = points[j].y - points[i].y;
        total += (dx * dx + dy * dy).sqrt();
    }

    total
}

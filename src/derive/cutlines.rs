//! Cutline rules: horizontal cutlines through structurally shared void
//! Y-levels, vertical cutlines midway between adjacent web centerlines.

use super::TOLERANCE;
use crate::domain::{Centerline, Cutline, CutlineKind, DeckSection, Point2D};
use crate::geometry::SectionBounds;

/// Minimum share of Y samples a level must hold to count as structurally
/// significant (one void top/bottom aligned across most voids)
const SHARED_LEVEL_QUORUM: usize = 4; // group count * 4 >= total samples

/// Horizontal cutlines through the second-highest and second-lowest void
/// vertex levels. None when the section has no voids.
pub(super) fn horizontal(section: &DeckSection, bounds: &SectionBounds) -> Vec<Cutline> {
    let mut cutlines = Vec::new();

    if section.interior_voids.is_empty() {
        return cutlines;
    }

    let mut void_ys: Vec<f64> = section
        .interior_voids
        .iter()
        .flat_map(|v| v.points.iter().map(|p| p.y))
        .collect();

    if void_ys.len() < 2 {
        return cutlines;
    }

    void_ys.sort_by(|a, b| b.total_cmp(a));
    if let Some(y) = second_extreme(&void_ys, true) {
        cutlines.push(Cutline::straight(
            Point2D::new(bounds.min_x, y),
            Point2D::new(bounds.max_x, y),
            CutlineKind::HorizontalTop,
            "TopCutline",
            format!(
                "Top horizontal cutline at Y={:.4} (second-highest void points)",
                y
            ),
        ));
    }

    void_ys.sort_by(f64::total_cmp);
    if let Some(y) = second_extreme(&void_ys, false) {
        cutlines.push(Cutline::straight(
            Point2D::new(bounds.min_x, y),
            Point2D::new(bounds.max_x, y),
            CutlineKind::HorizontalBottom,
            "BottomCutline",
            format!(
                "Bottom horizontal cutline at Y={:.4} (second-lowest void points)",
                y
            ),
        ));
    }

    cutlines
}

/// Find the "second" extreme of a list of values already sorted in the
/// requested direction.
///
/// Values within [`TOLERANCE`] of each other count as one level. A level
/// holding at least 25% of all samples wins over the literal second value,
/// which keeps a single stray vertex from stealing the cutline; otherwise
/// the second distinct value in the sort direction is used.
fn second_extreme(values: &[f64], descending: bool) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    // Group values rounded to tolerance, first-seen order preserved
    let mut groups: Vec<(i64, usize)> = Vec::new();
    for &v in values {
        let key = (v / TOLERANCE).round() as i64;
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => groups.push((key, 1)),
        }
    }

    // Stable sort: equal counts keep their first-seen order
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    if groups.len() < 2 {
        // All samples at one level; the literal second value is it
        return Some(values[1]);
    }

    let (second_key, second_count) = groups[1];
    if second_count * SHARED_LEVEL_QUORUM >= values.len() {
        return Some(second_key as f64 * TOLERANCE);
    }

    let mut unique = values.to_vec();
    if descending {
        unique.sort_by(|a, b| b.total_cmp(a));
    } else {
        unique.sort_by(f64::total_cmp);
    }
    unique.dedup();

    if unique.len() >= 2 { Some(unique[1]) } else { None }
}

/// Vertical cutlines midway between each adjacent pair of web centerlines,
/// sorted left to right. None when fewer than two webs exist.
pub(super) fn vertical(centerlines: &[Centerline]) -> Vec<Cutline> {
    let mut webs: Vec<&Centerline> = centerlines.iter().filter(|c| c.is_web()).collect();
    webs.sort_by(|a, b| a.points[0].x.total_cmp(&b.points[0].x));

    let mut cutlines = Vec::new();
    if webs.len() < 2 {
        return cutlines;
    }

    for i in 0..webs.len() - 1 {
        let left = webs[i];
        let right = webs[i + 1];

        cutlines.push(Cutline::new(
            midline_between(&left.points, &right.points),
            CutlineKind::VerticalWeb,
            format!("VerticalCut{}", i + 1),
            format!("Vertical cutline between {} and {}", left.name, right.name),
        ));
    }

    cutlines
}

/// A 2-point polyline midway between two web centerlines, spanning the union
/// of their Y ranges.
fn midline_between(left: &[Point2D], right: &[Point2D]) -> Vec<Point2D> {
    // Simple case: both are 2-point vertical lines
    if left.len() == 2 && right.len() == 2 {
        let mid_x_bottom = (left[0].x + right[0].x) / 2.0;
        let y_bottom = left[0].y.min(right[0].y);

        let mid_x_top = (left[1].x + right[1].x) / 2.0;
        let y_top = left[1].y.max(right[1].y);

        return vec![
            Point2D::new(mid_x_bottom, y_bottom),
            Point2D::new(mid_x_top, y_top),
        ];
    }

    // Multi-point webs (sloped or contoured): resample both at the union Y
    // range and take midpoints. Not produced by the current centerline rules
    // but the data model allows it.
    let min_y = polyline_min_y(left).min(polyline_min_y(right));
    let max_y = polyline_max_y(left).max(polyline_max_y(right));

    let mid_x_bottom = (x_at_y(left, min_y) + x_at_y(right, min_y)) / 2.0;
    let mid_x_top = (x_at_y(left, max_y) + x_at_y(right, max_y)) / 2.0;

    vec![
        Point2D::new(mid_x_bottom, min_y),
        Point2D::new(mid_x_top, max_y),
    ]
}

fn polyline_min_y(points: &[Point2D]) -> f64 {
    points.iter().map(|p| p.y).fold(f64::MAX, f64::min)
}

fn polyline_max_y(points: &[Point2D]) -> f64 {
    points.iter().map(|p| p.y).fold(f64::MIN, f64::max)
}

/// X coordinate at a given Y, interpolated linearly along the polyline.
///
/// A near-horizontal segment returns its own start X instead of dividing by
/// a vanishing Y delta. A target outside the polyline's Y range clamps to
/// the lowest or highest point's X.
fn x_at_y(points: &[Point2D], target_y: f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    for i in 0..points.len() - 1 {
        let y1 = points[i].y;
        let y2 = points[i + 1].y;

        if (target_y >= y1 && target_y <= y2) || (target_y >= y2 && target_y <= y1) {
            let x1 = points[i].x;
            let x2 = points[i + 1].x;

            if (y2 - y1).abs() < TOLERANCE {
                return x1;
            }

            let t = (target_y - y1) / (y2 - y1);
            return x1 + t * (x2 - x1);
        }
    }

    if target_y < polyline_min_y(points) {
        points
            .iter()
            .min_by(|a, b| a.y.total_cmp(&b.y))
            .map(|p| p.x)
            .unwrap_or(0.0)
    } else {
        points
            .iter()
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .map(|p| p.x)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CenterlineKind;

    #[test]
    fn test_second_extreme_two_shared_levels() {
        // Two rectangular voids: four vertices at 1.7, four at 0.3
        let mut ys: Vec<f64> = vec![1.7, 1.7, 0.3, 0.3, 1.7, 1.7, 0.3, 0.3];

        ys.sort_by(|a, b| b.total_cmp(a));
        let second_highest = second_extreme(&ys, true).unwrap();
        assert!((second_highest - 0.3).abs() < 1e-9);

        ys.sort_by(f64::total_cmp);
        let second_lowest = second_extreme(&ys, false).unwrap();
        assert!((second_lowest - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_second_extreme_ignores_stray_vertex() {
        // One stray vertex at 1.65 is the literal second-highest value, but
        // the shared 1.7 level holds >= 25% of samples and wins.
        let mut ys: Vec<f64> = vec![1.7, 1.7, 1.7, 1.65, 0.3, 0.3, 0.3, 0.3];
        ys.sort_by(|a, b| b.total_cmp(a));

        let second_highest = second_extreme(&ys, true).unwrap();
        assert!((second_highest - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_second_extreme_distinct_fallback() {
        // No level reaches the 25% quorum for second place: fall back to the
        // second distinct value in the sort direction.
        let mut ys: Vec<f64> = vec![5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 4.0, 3.0];
        ys.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(second_extreme(&ys, true), Some(4.0));

        ys.sort_by(f64::total_cmp);
        assert_eq!(second_extreme(&ys, false), Some(4.0));
    }

    #[test]
    fn test_second_extreme_single_level() {
        let ys = vec![2.0, 2.0, 2.0];
        assert_eq!(second_extreme(&ys, true), Some(2.0));
        assert_eq!(second_extreme(&[1.0], true), None);
    }

    #[test]
    fn test_midline_between_uneven_extents() {
        // Webs with slightly different Y extents: take the union of the range
        let left = vec![Point2D::new(1.0, 0.1), Point2D::new(1.0, 1.9)];
        let right = vec![Point2D::new(3.0, 0.0), Point2D::new(3.0, 2.0)];

        let mid = midline_between(&left, &right);
        assert_eq!(mid.len(), 2);
        assert!((mid[0].x - 2.0).abs() < 1e-12);
        assert_eq!(mid[0].y, 0.0);
        assert_eq!(mid[1].y, 2.0);
    }

    #[test]
    fn test_midline_between_multi_point_web() {
        // A sloped 3-point web against a straight one
        let left = vec![
            Point2D::new(1.0, 0.0),
            Point2D::new(1.5, 1.0),
            Point2D::new(2.0, 2.0),
        ];
        let right = vec![Point2D::new(4.0, 0.0), Point2D::new(4.0, 2.0)];

        let mid = midline_between(&left, &right);
        assert!((mid[0].x - 2.5).abs() < 1e-12);
        assert!((mid[1].x - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_x_at_y_interpolation() {
        let line = vec![Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0)];
        assert!((x_at_y(&line, 1.0) - 1.0).abs() < 1e-12);

        // Outside the range: clamp to the nearest end
        assert_eq!(x_at_y(&line, -1.0), 0.0);
        assert_eq!(x_at_y(&line, 3.0), 2.0);

        // Near-horizontal segment returns its start X
        let flat = vec![Point2D::new(1.0, 1.0), Point2D::new(5.0, 1.0 + 1e-9)];
        assert_eq!(x_at_y(&flat, 1.0), 1.0);
    }

    #[test]
    fn test_vertical_requires_two_webs() {
        let single_web = vec![Centerline::straight(
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 2.0),
            CenterlineKind::WebExterior,
            "LeftWebCL",
            "",
        )];
        assert!(vertical(&single_web).is_empty());
    }
}

//! Bounds validation of derived lines.
//!
//! Every derived point must lie inside the exterior bounding box expanded by
//! the numeric tolerance. A violation is a correctness assertion failure of
//! the derivation rules, not a recoverable condition.

use super::TOLERANCE;
use crate::domain::{Centerline, Cutline, Point2D};
use crate::error::{Result, SectionError};
use crate::geometry::SectionBounds;

pub(super) fn check_lines(
    centerlines: &[Centerline],
    cutlines: &[Cutline],
    bounds: &SectionBounds,
) -> Result<()> {
    let x_min = bounds.min_x - TOLERANCE;
    let x_max = bounds.max_x + TOLERANCE;
    let y_min = bounds.bottom_surface_y - TOLERANCE;
    let y_max = bounds.top_surface_y + TOLERANCE;

    for centerline in centerlines {
        for point in &centerline.points {
            check_point(point, x_min, x_max, y_min, y_max, || {
                format!("centerline {}", centerline.name)
            })?;
        }
    }

    for cutline in cutlines {
        for point in &cutline.points {
            check_point(point, x_min, x_max, y_min, y_max, || {
                format!("cutline {}", cutline.name)
            })?;
        }
    }

    Ok(())
}

fn check_point(
    point: &Point2D,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    describe: impl Fn() -> String,
) -> Result<()> {
    if point.x < x_min || point.x > x_max || point.y < y_min || point.y > y_max {
        return Err(SectionError::InvalidGeometry(format!(
            "{}: point ({:.4}, {:.4}) is outside section bounds [X: {:.4} to {:.4}, Y: {:.4} to {:.4}]",
            describe(),
            point.x,
            point.y,
            x_min,
            x_max,
            y_min,
            y_max
        )));
    }

    Ok(())
}

//! Slab and web centerline rules.

use crate::domain::{Centerline, CenterlineKind, Point2D};
use crate::geometry::SectionBounds;

/// Fraction of the overall section height assumed to be slab thickness when
/// no void geometry constrains it
const SLAB_THICKNESS_RATIO: f64 = 0.1;

/// Top slab centerline, always emitted once per section.
///
/// With voids: Y = midpoint of top surface and the nearest void top edge.
/// Without voids: Y = top surface minus half the estimated slab thickness.
pub(super) fn top_slab(bounds: &SectionBounds) -> Centerline {
    match bounds.top_void_edge_y {
        Some(top_void_edge_y) => {
            let mid_thickness_y = (bounds.top_surface_y + top_void_edge_y) / 2.0;
            // TODO: follow the top surface contour when it is sloped
            Centerline::straight(
                Point2D::new(bounds.min_x, mid_thickness_y),
                Point2D::new(bounds.max_x, mid_thickness_y),
                CenterlineKind::TopSlab,
                "TopSlabCL",
                format!(
                    "Top slab centerline at Y={:.4} (midpoint of top slab)",
                    mid_thickness_y
                ),
            )
        }
        None => {
            let slab_thickness = bounds.height() * SLAB_THICKNESS_RATIO;
            let centerline_y = bounds.top_surface_y - slab_thickness / 2.0;
            Centerline::straight(
                Point2D::new(bounds.min_x, centerline_y),
                Point2D::new(bounds.max_x, centerline_y),
                CenterlineKind::TopSlab,
                "TopSlabCL",
                format!(
                    "Top slab centerline at Y={:.4} (estimated thickness={:.4})",
                    centerline_y, slab_thickness
                ),
            )
        }
    }
}

/// Bottom slab centerline, mirror of [`top_slab`].
pub(super) fn bottom_slab(bounds: &SectionBounds) -> Centerline {
    match bounds.bottom_void_edge_y {
        Some(bottom_void_edge_y) => {
            let mid_thickness_y = (bounds.bottom_surface_y + bottom_void_edge_y) / 2.0;
            Centerline::straight(
                Point2D::new(bounds.min_x, mid_thickness_y),
                Point2D::new(bounds.max_x, mid_thickness_y),
                CenterlineKind::BottomSlab,
                "BottomSlabCL",
                format!(
                    "Bottom slab centerline at Y={:.4} (midpoint of bottom slab)",
                    mid_thickness_y
                ),
            )
        }
        None => {
            let slab_thickness = bounds.height() * SLAB_THICKNESS_RATIO;
            let centerline_y = bounds.bottom_surface_y + slab_thickness / 2.0;
            Centerline::straight(
                Point2D::new(bounds.min_x, centerline_y),
                Point2D::new(bounds.max_x, centerline_y),
                CenterlineKind::BottomSlab,
                "BottomSlabCL",
                format!(
                    "Bottom slab centerline at Y={:.4} (estimated thickness={:.4})",
                    centerline_y, slab_thickness
                ),
            )
        }
    }
}

/// Web centerlines: two exterior webs plus one interior web per adjacent
/// void pair. A solid section has none.
pub(super) fn webs(bounds: &SectionBounds) -> Vec<Centerline> {
    let mut web_centerlines = Vec::new();

    if bounds.void_bounds.is_empty() {
        return web_centerlines;
    }

    // Left to right by void centroid
    let mut sorted_voids = bounds.void_bounds.clone();
    sorted_voids.sort_by(|a, b| a.centroid.x.total_cmp(&b.centroid.x));

    let left_web_x = (bounds.min_x + sorted_voids[0].min_x) / 2.0;
    web_centerlines.push(vertical_web(
        left_web_x,
        bounds,
        CenterlineKind::WebExterior,
        "LeftWebCL",
        format!("Left exterior web at X={:.4}", left_web_x),
    ));

    let rightmost = &sorted_voids[sorted_voids.len() - 1];
    let right_web_x = (bounds.max_x + rightmost.max_x) / 2.0;
    web_centerlines.push(vertical_web(
        right_web_x,
        bounds,
        CenterlineKind::WebExterior,
        "RightWebCL",
        format!("Right exterior web at X={:.4}", right_web_x),
    ));

    for i in 0..sorted_voids.len() - 1 {
        let interior_web_x = (sorted_voids[i].max_x + sorted_voids[i + 1].min_x) / 2.0;
        web_centerlines.push(vertical_web(
            interior_web_x,
            bounds,
            CenterlineKind::WebInterior,
            format!("Web{}CL", i + 1),
            format!("Interior web {} at X={:.4}", i + 1, interior_web_x),
        ));
    }

    web_centerlines
}

fn vertical_web(
    x: f64,
    bounds: &SectionBounds,
    kind: CenterlineKind,
    name: impl Into<String>,
    description: String,
) -> Centerline {
    Centerline::straight(
        Point2D::new(x, bounds.bottom_surface_y),
        Point2D::new(x, bounds.top_surface_y),
        kind,
        name,
        description,
    )
}
